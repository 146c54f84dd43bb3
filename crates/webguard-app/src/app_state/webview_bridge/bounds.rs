//! Window layout and conversion to wry rects.

use webguard_common::{Rect, ShellMode};

// =============================================================================
// LAYOUT
// =============================================================================

/// Where each surface goes inside the window. The browser surface and the
/// chrome overlay share `content`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceLayout {
    pub toolbar: Option<Rect>,
    pub content: Rect,
}

pub fn compute_layout(viewport: Rect, mode: ShellMode, toolbar_height: f64) -> SurfaceLayout {
    match mode {
        ShellMode::Restricted => SurfaceLayout {
            toolbar: None,
            content: viewport,
        },
        ShellMode::Browser => {
            let (toolbar, content) = viewport.split_top(toolbar_height);
            SurfaceLayout {
                toolbar: Some(toolbar),
                content,
            }
        }
    }
}

// =============================================================================
// COORDINATE CONVERSION
// =============================================================================

/// Convert a layout `Rect` (f64 logical coords) to a wry `Rect`.
pub fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 800.0)
    }

    #[test]
    fn restricted_content_fills_window() {
        let layout = compute_layout(viewport(), ShellMode::Restricted, 48.0);
        assert!(layout.toolbar.is_none());
        assert_eq!(layout.content, viewport());
    }

    #[test]
    fn browser_mode_reserves_toolbar_strip() {
        let layout = compute_layout(viewport(), ShellMode::Browser, 48.0);
        assert_eq!(layout.toolbar, Some(Rect::new(0.0, 0.0, 1280.0, 48.0)));
        assert_eq!(layout.content, Rect::new(0.0, 48.0, 1280.0, 752.0));
    }

    #[test]
    fn toolbar_is_clamped_to_tiny_windows() {
        let layout = compute_layout(Rect::new(0.0, 0.0, 300.0, 30.0), ShellMode::Browser, 48.0);
        assert_eq!(layout.toolbar.map(|r| r.height), Some(30.0));
        assert_eq!(layout.content.height, 0.0);
    }

    #[test]
    fn rect_converts_to_wry_rect() {
        let wry_rect = rect_to_wry(&Rect::new(100.0, 50.0, 800.0, 600.0));

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x - 100.0).abs() < f64::EPSILON);
                assert!((pos.y - 50.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }

        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 800.0).abs() < f64::EPSILON);
                assert!((size.height - 600.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
