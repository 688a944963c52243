use pbrom_lib::{ConsoleType, RomCatalog, STATE_FILE_NAME};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn make_roms(base: &Path, subdir: &str, names: &[&str]) {
    let dir = base.join(subdir);
    fs::create_dir_all(&dir).unwrap();
    for name in names {
        fs::write(dir.join(name), b"rom").unwrap();
    }
}

#[test]
fn megadrive_scenario() {
    let tmp = TempDir::new().unwrap();
    make_roms(tmp.path(), "smd", &["a.smd", "B.BIN", "c.txt"]);

    let roms = RomCatalog::open(ConsoleType::MegaDrive, tmp.path());
    assert_eq!(roms.entries(), vec!["a.smd"]);
    assert_eq!(roms.rom_count(), 1);
    for _ in 0..3 {
        assert_eq!(roms.next().as_deref(), Some("a.smd"));
    }
    assert_eq!(
        roms.current_full_path(),
        Some(tmp.path().join("smd").join("a.smd"))
    );
}

#[test]
fn empty_directory_has_no_roms() {
    let tmp = TempDir::new().unwrap();
    make_roms(tmp.path(), "nes", &[]);

    let roms = RomCatalog::open(ConsoleType::Nes, tmp.path());
    assert_eq!(roms.rom_count(), 0);
    assert_eq!(roms.next(), None);
    assert_eq!(roms.previous(), None);
    assert_eq!(roms.current_full_path(), None);
    assert_eq!(roms.active_rom_name(), None);
}

#[test]
fn missing_directory_has_no_roms() {
    let tmp = TempDir::new().unwrap();
    let roms = RomCatalog::open(ConsoleType::PcEngine, tmp.path());
    assert_eq!(roms.root_directory(), tmp.path().join("pce"));
    assert_eq!(roms.rom_count(), 0);
}

#[test]
fn nes_browsing_wraps_forward() {
    let tmp = TempDir::new().unwrap();
    make_roms(tmp.path(), "nes", &["c.nes", "a.nes", "b.nes"]);

    let roms = RomCatalog::open(ConsoleType::Nes, tmp.path());
    assert_eq!(roms.active_rom_name().as_deref(), Some("a.nes"));
    assert_eq!(roms.next().as_deref(), Some("b.nes"));
    assert_eq!(roms.next().as_deref(), Some("c.nes"));
    assert_eq!(roms.next().as_deref(), Some("a.nes"));
    assert_eq!(roms.index(), 0);
    assert_eq!(roms.previous().as_deref(), Some("a.nes"));
}

#[test]
fn refresh_replaces_catalog() {
    let tmp = TempDir::new().unwrap();
    make_roms(tmp.path(), "gba", &["a.gba", "b.gba", "c.gba"]);

    let roms = RomCatalog::open(ConsoleType::GameBoyAdvance, tmp.path());
    assert!(roms.set_index(2));
    fs::remove_file(tmp.path().join("gba").join("c.gba")).unwrap();
    fs::remove_file(tmp.path().join("gba").join("b.gba")).unwrap();

    assert_eq!(roms.refresh_from_disk(), 1);
    assert_eq!(roms.index(), 0);
    assert_eq!(roms.active_rom_name().as_deref(), Some("a.gba"));

    // A second refresh does not duplicate entries.
    assert_eq!(roms.refresh_from_disk(), 1);
    assert_eq!(roms.entries(), vec!["a.gba"]);
}

#[test]
fn state_survives_restart() {
    let tmp = TempDir::new().unwrap();
    make_roms(tmp.path(), "gb", &["a.gb", "b.gbc", "c.zip"]);

    let roms = RomCatalog::open(ConsoleType::GameBoyColor, tmp.path());
    roms.next();
    roms.next();
    roms.save_state().unwrap();

    let text = fs::read_to_string(tmp.path().join("gb").join(STATE_FILE_NAME)).unwrap();
    assert_eq!(text, "2\nc.zip\na.gb\nb.gbc\nc.zip\n");

    let reopened = RomCatalog::open(ConsoleType::GameBoy, tmp.path());
    assert_eq!(reopened.index(), 2);
    assert_eq!(reopened.active_rom_name().as_deref(), Some("c.zip"));
}

#[test]
fn restore_prefers_saved_name_over_index() {
    let tmp = TempDir::new().unwrap();
    make_roms(tmp.path(), "nes", &["b.nes", "c.nes"]);
    fs::write(
        tmp.path().join("nes").join(STATE_FILE_NAME),
        "1\nc.nes\nb.nes\nc.nes\n",
    )
    .unwrap();
    // A new ROM shifts c.nes to index 2.
    make_roms(tmp.path(), "nes", &["a.nes"]);

    let roms = RomCatalog::open(ConsoleType::Nes, tmp.path());
    assert_eq!(roms.index(), 2);
    assert_eq!(roms.active_rom_name().as_deref(), Some("c.nes"));
}

#[test]
fn restore_falls_back_to_index_then_zero() {
    let tmp = TempDir::new().unwrap();
    make_roms(tmp.path(), "pce", &["a.pce", "b.pce"]);
    let state = tmp.path().join("pce").join(STATE_FILE_NAME);

    fs::write(&state, "1\ngone.pce\n").unwrap();
    let roms = RomCatalog::open(ConsoleType::PcEngine, tmp.path());
    assert_eq!(roms.active_rom_name().as_deref(), Some("b.pce"));

    fs::write(&state, "9\ngone.pce\n").unwrap();
    let roms = RomCatalog::open(ConsoleType::PcEngine, tmp.path());
    assert_eq!(roms.index(), 0);
}

#[test]
fn restore_applies_only_once() {
    let tmp = TempDir::new().unwrap();
    make_roms(tmp.path(), "lnx", &["a.lnx", "b.lnx"]);
    fs::write(tmp.path().join("lnx").join(STATE_FILE_NAME), "1\nb.lnx\n").unwrap();

    let roms = RomCatalog::open(ConsoleType::Lynx, tmp.path());
    assert_eq!(roms.index(), 1);
    assert!(roms.set_index(0));
    roms.refresh_from_disk();
    assert_eq!(roms.index(), 0);
}

#[test]
fn save_failure_keeps_memory_state() {
    let tmp = TempDir::new().unwrap();
    // Root never created: scanning is empty and saving has nowhere to go.
    let roms = RomCatalog::open(ConsoleType::Nes, tmp.path());
    assert!(roms.save_state().is_err());
    assert_eq!(roms.rom_count(), 0);
    assert_eq!(roms.index(), 0);
}

#[test]
fn set_active_root_requires_existing_directory() {
    let tmp = TempDir::new().unwrap();
    make_roms(tmp.path(), "nes", &["a.nes"]);
    make_roms(tmp.path(), "other", &["x.nes", "y.nes"]);

    let roms = RomCatalog::open(ConsoleType::Nes, tmp.path());
    assert!(!roms.set_active_root_directory(&tmp.path().join("missing")));
    assert_eq!(roms.root_directory(), tmp.path().join("nes"));

    assert!(roms.set_active_root_directory(&tmp.path().join("other")));
    assert_eq!(roms.entries(), vec!["x.nes", "y.nes"]);
    assert_eq!(roms.state_path(), tmp.path().join("other").join(STATE_FILE_NAME));
}

#[test]
fn alternate_base_only_when_present() {
    let internal = TempDir::new().unwrap();
    let sd = TempDir::new().unwrap();
    make_roms(internal.path(), "smd", &["a.smd"]);
    make_roms(sd.path(), "smd", &["x.gen", "y.bin"]);

    let roms = RomCatalog::open(ConsoleType::MegaDrive, internal.path());
    assert!(!roms.use_alternate_base(&sd.path().join("not-mounted")));
    assert_eq!(roms.entries(), vec!["a.smd"]);

    assert!(roms.use_alternate_base(sd.path()));
    assert_eq!(roms.root_directory(), sd.path().join("smd"));
    assert_eq!(roms.entries(), vec!["x.gen", "y.bin"]);
    assert_eq!(roms.extensions(), ConsoleType::MegaDrive.extensions());
}

#[test]
fn bad_flags_reset_when_root_changes() {
    let tmp = TempDir::new().unwrap();
    make_roms(tmp.path(), "nes", &["a.nes"]);
    make_roms(tmp.path(), "other", &["a.nes"]);

    let roms = RomCatalog::open(ConsoleType::Nes, tmp.path());
    assert!(roms.mark_current_bad());
    assert!(roms.is_current_bad());
    assert_eq!(roms.bad_entries(), vec!["a.nes"]);

    roms.set_active_root_directory(&tmp.path().join("other"));
    assert!(!roms.is_current_bad());
}

#[test]
fn full_paths_follow_catalog_order() {
    let tmp = TempDir::new().unwrap();
    make_roms(tmp.path(), "gba", &["b.gba", "a.GBA"]);

    let roms = RomCatalog::open(ConsoleType::GameBoyAdvance, tmp.path());
    let dir = tmp.path().join("gba");
    assert_eq!(roms.full_paths(), vec![dir.join("a.GBA"), dir.join("b.gba")]);
}

#[test]
fn readers_never_see_out_of_range_index() {
    let tmp = TempDir::new().unwrap();
    let names: Vec<String> = (0..50).map(|i| format!("{i:02}.nes")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    make_roms(tmp.path(), "nes", &refs);

    let roms = Arc::new(RomCatalog::open(ConsoleType::Nes, tmp.path()));
    let refresher = {
        let roms = Arc::clone(&roms);
        std::thread::spawn(move || {
            for _ in 0..20 {
                roms.refresh_from_disk();
            }
        })
    };
    for _ in 0..200 {
        let name = roms.next().unwrap();
        assert!(names.contains(&name));
        assert!(roms.index() < roms.rom_count());
    }
    refresher.join().unwrap();
}

#[cfg(unix)]
#[test]
fn unlistable_root_is_refused() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    make_roms(tmp.path(), "nes", &["a.nes"]);
    make_roms(tmp.path(), "locked", &["x.nes"]);
    let locked = tmp.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop root from listing.
    if fs::read_dir(&locked).is_err() {
        let roms = RomCatalog::open(ConsoleType::Nes, tmp.path());
        assert!(!roms.set_active_root_directory(&locked));
        assert_eq!(roms.root_directory(), tmp.path().join("nes"));
        assert_eq!(roms.entries(), vec!["a.nes"]);
    }

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}
