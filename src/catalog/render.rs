//! HTML fragments for the catalog grid. Every record field is escaped
//! before interpolation; store contents are untrusted.

use crate::types::models::mod_entity::Mod;

/// Inline SVG placeholder shown when a mod has no hosted icon.
pub const DEFAULT_ICON: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMjQiIGhlaWdodD0iMjQiIHZpZXdCb3g9IjAgMCAyNCAyNCIgZmlsbD0ibm9uZSIgc3Ryb2tlPSJjdXJyZW50Q29sb3IiIHN0cm9rZS13aWR0aD0iMiIgc3Ryb2tlLWxpbmVjYXA9InJvdW5kIiBzdHJva2UtbGluZWpvaW49InJvdW5kIj4KICA8Y2lyY2xlIGN4PSIxMiIgY3k9IjEyIiByPSIxMCI+PC9jaXJjbGU+CiAgPHBhdGggZD0iTTcgMTJMMTcgMTIiPjwvcGF0aD4KPC9zdmc+";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn mods_count_label(count: usize) -> String {
    if count == 1 {
        "1 mod available".to_string()
    } else {
        format!("{count} mods available")
    }
}

/// One card in the grid. The `data-mod-id` attribute is what click handlers
/// read back to open the detail view.
pub fn mod_card(mod_entry: &Mod) -> String {
    let icon = mod_entry.icon_url.as_deref().unwrap_or(DEFAULT_ICON);
    format!(
        r#"<div class="mod-card" data-mod-id="{id}">
    <img src="{icon}" alt="{name}" class="mod-icon">
    <div class="mod-info">
        <h3 class="mod-name">{name}</h3>
        <div class="mod-meta">
            <span class="mod-developer">{developer}</span>
            <span class="mod-version">{version}</span>
        </div>
        <span class="mod-size">{size}</span>
    </div>
</div>"#,
        id = mod_entry.id,
        icon = escape(icon),
        name = escape(&mod_entry.name),
        developer = escape(&mod_entry.developer),
        version = escape(&mod_entry.version),
        size = escape(&mod_entry.size),
    )
}

pub fn mod_grid(mods: &[Mod]) -> String {
    if mods.is_empty() {
        return r#"<div class="empty-state"><h3>No mods found</h3></div>"#.to_string();
    }
    mods.iter().map(mod_card).collect::<Vec<_>>().join("\n")
}
