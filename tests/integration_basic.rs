use span_wm::surface::{Surface, SurfaceRegistry};
use span_wm::window::{WindowCoordinator, WindowFrame};

#[test]
fn registry_resolves_by_registration_order() {
    let mut registry = SurfaceRegistry::new();
    let first = registry.open(Surface::new(0, 0, 800, 600));
    let second = registry.open(Surface::new(400, 0, 800, 600));
    // inside both: first registered wins
    assert_eq!(registry.resolve_surface_at(600, 100), Some(first));
    // inside only the second
    assert_eq!(registry.resolve_surface_at(900, 100), Some(second));
    // dead space
    assert_eq!(registry.resolve_surface_at(-50, 100), None);
}

#[test]
fn closing_surfaces_is_idempotent() {
    let mut registry = SurfaceRegistry::new();
    let s1 = registry.open(Surface::new(0, 0, 800, 600));
    let s2 = registry.open(Surface::new(800, 0, 800, 600));
    registry.close(s1);
    registry.close(s1);
    assert!(!registry.is_open(s1));
    assert!(registry.is_open(s2));
    assert_eq!(registry.len(), 1);
}

#[test]
fn window_lifecycle_and_layers() {
    let mut registry = SurfaceRegistry::new();
    let s1 = registry.open(Surface::new(0, 0, 800, 600));

    let mut wm: WindowCoordinator<&str> = WindowCoordinator::new();
    wm.open_window("editor", WindowFrame::new(10, 10, 400, 300), s1);
    wm.open_window("log", WindowFrame::new(50, 50, 300, 200), s1);
    wm.open_window("prefs", WindowFrame::new(90, 90, 200, 150), s1);
    assert_eq!(wm.windows_on(s1), &["editor", "log", "prefs"]);

    // activating promotes to the top layer and leaves the rest ordered
    wm.activate_window("editor");
    assert_eq!(wm.active_window(), Some("editor"));
    assert_eq!(wm.open_windows(), &["log", "prefs", "editor"]);
    let editor = wm.layer("editor").unwrap();
    assert!(editor > wm.layer("log").unwrap());
    assert!(editor > wm.layer("prefs").unwrap());
    assert!(wm.layer("prefs").unwrap() > wm.layer("log").unwrap());

    wm.close_window("editor");
    assert_eq!(wm.active_window(), None);
    assert!(!wm.is_open("editor"));
    assert_eq!(wm.windows_on(s1), &["log", "prefs"]);
}

#[test]
fn channels_group_windows() {
    let mut registry = SurfaceRegistry::new();
    let s1 = registry.open(Surface::new(0, 0, 800, 600));

    let mut wm: WindowCoordinator<u32> = WindowCoordinator::new();
    for id in 1..=3u32 {
        wm.open_window(id, WindowFrame::new(0, 0, 200, 150), s1);
    }
    wm.set_channel(1, "chat");
    wm.set_channel(2, "chat");
    wm.set_channel(3, "media");
    assert_eq!(wm.channel_windows("chat"), &[1, 2]);
    assert_eq!(wm.channel(3), Some("media"));

    // moving a window between channels updates both directions
    wm.set_channel(2, "media");
    assert_eq!(wm.channel_windows("chat"), &[1]);
    assert_eq!(wm.channel_windows("media"), &[3, 2]);
    assert_eq!(wm.channel(2), Some("media"));
}

#[test]
fn maximize_uses_owning_surface_size() {
    let mut registry = SurfaceRegistry::new();
    let s1 = registry.open(Surface::new(0, 0, 1024, 768));
    let mut wm: WindowCoordinator<u32> = WindowCoordinator::new();
    wm.open_window(1, WindowFrame::new(100, 120, 400, 300), s1);
    wm.toggle_maximize(1, &registry);
    let frame = wm.frame(1).unwrap();
    assert_eq!((frame.left, frame.top), (0, 0));
    assert!(frame.width > 1000);
    wm.toggle_maximize(1, &registry);
    assert_eq!(wm.frame(1), Some(WindowFrame::new(100, 120, 400, 300)));
}
