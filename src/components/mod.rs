//! UI components built with Leptos.
//!
//! - [`explorer`] - File browser UI (sidebar, breadcrumb, list, context menu)
//! - [`UploadModal`] - File and folder upload dialog
//! - [`FolderModal`] - New folder dialog
//! - [`NotificationToast`] - Transient success/error messages
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
mod folder_modal;
pub mod icons;
mod modal;
mod notification;
mod upload_modal;

pub use explorer::Explorer;
pub use folder_modal::FolderModal;
pub use notification::NotificationToast;
pub use upload_modal::UploadModal;

#[cfg(test)]
mod tests {
    /// Class selectors declared at the top level of a CSS module.
    fn declared_classes(css: &str) -> Vec<&str> {
        let mut classes: Vec<&str> = css
            .lines()
            .filter_map(|line| line.strip_prefix('.'))
            .map(|rest| {
                let end = rest
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
                    .unwrap_or(rest.len());
                &rest[..end]
            })
            .collect();
        classes.sort_unstable();
        classes.dedup();
        classes
    }

    fn references(source: &str, alias: &str, class: &str) -> bool {
        let needle = format!("{}::{}", alias, class);
        source.match_indices(&needle).any(|(at, _)| {
            let before = source[..at].chars().next_back();
            let after = source[at + needle.len()..].chars().next();
            let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
            !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
        })
    }

    fn assert_all_used(css: &str, alias: &str, sources: &[&str]) {
        for class in declared_classes(css) {
            assert!(
                sources.iter().any(|source| references(source, alias, class)),
                "class `{}` is never referenced as {}::{}",
                class,
                alias,
                class
            );
        }
    }

    #[test]
    fn test_declared_classes() {
        let css = ".a {\n}\n\n.b,\n.c:hover {\n  color: red;\n}\n.a:disabled {\n}\n";
        assert_eq!(declared_classes(css), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dialog_styles_are_all_used() {
        let modal = include_str!("modal.rs");
        let folder = include_str!("folder_modal.rs");
        let upload = include_str!("upload_modal.rs");

        assert_all_used(include_str!("modal.module.css"), "css", &[modal]);
        assert_all_used(include_str!("dialog_form.module.css"), "form_css", &[folder, upload]);
        assert_all_used(include_str!("folder_modal.module.css"), "css", &[folder]);
        assert_all_used(include_str!("upload_modal.module.css"), "css", &[upload]);
    }
}
