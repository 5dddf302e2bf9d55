//! Plain-text rendering of navigation entries.

use std::fmt::Write;

use crate::icons::IconProvider;
use crate::navigation::model::{BadgeKind, RenderedItem};

/// Render entries one per line:
///
/// ```text
/// > ⌂  Home
///   👤 Profile            [active]
///   🔔 Notifications      (4)
/// ```
///
/// Active entries get `>`, disabled ones (no target) get `-`.
pub fn render_menu(items: &[RenderedItem], icons: &dyn IconProvider) -> String {
    let width = items.iter().map(|i| i.label.chars().count()).max().unwrap_or(0);
    let mut out = String::new();

    for item in items {
        let marker = match (item.is_active, item.target.is_some()) {
            (true, _) => '>',
            (false, true) => ' ',
            (false, false) => '-',
        };
        let symbol = item
            .glyph
            .as_ref()
            .and_then(|glyph| icons.symbol(glyph))
            .unwrap_or(" ");

        let _ = write!(out, "{} {:<2} {:<width$}", marker, symbol, item.label, width = width);
        match &item.badge {
            Some(badge) if badge.kind == BadgeKind::Status => {
                let _ = write!(out, "  [{}]", badge.value);
            }
            Some(badge) => {
                let _ = write!(out, "  ({})", badge.value);
            }
            None => {}
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconLibrary;
    use crate::navigation::{Badge, NavigationItem, NavigationModel};
    use crate::routing::path::NavPath;

    #[test]
    fn test_render_menu_lines() {
        let mut model = NavigationModel::new(vec![
            NavigationItem::new("Home").with_link("/home"),
            NavigationItem::new("Profile")
                .with_icon("far", "user")
                .with_badge(Badge::Status)
                .with_link("/profile"),
            NavigationItem::new("Inbox")
                .with_icon("far", "unknown")
                .with_badge(Badge::Count(4)),
        ]);
        model.set_active(&NavPath::parse("/home").unwrap());

        let text = render_menu(&model.render(), &IconLibrary::standard());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("> ⌂"));
        assert!(lines[0].ends_with("Home"));
        assert!(lines[1].contains("👤"));
        assert!(lines[1].ends_with("[active]"));
        assert!(lines[2].starts_with('-'));
        assert!(lines[2].ends_with("(4)"));
    }
}
