//! Config serialization to TOML
//!
//! Single source of truth for config file format. Strings go through `{:?}`
//! so quotes and backslashes come out escaped.

use super::Config;

impl Config {
    /// Serialize links as an array of inline tables
    fn links_to_toml(&self) -> String {
        let entries: Vec<String> = self
            .profile
            .links
            .iter()
            .map(|l| format!("  {{ label = {:?}, url = {:?} }},", l.label, l.url))
            .collect();
        format!("[\n{}\n]", entries.join("\n"))
    }

    /// Serialize project cards as [[projects]] entries
    fn projects_to_toml(&self) -> String {
        let mut output = String::new();
        for project in &self.projects {
            output.push_str("\n[[projects]]\n");
            output.push_str(&format!("title = {:?}\n", project.title));
            output.push_str(&format!("description = {:?}\n", project.description));
            output.push_str(&format!("tags = {:?}\n", project.tags));
            if let Some(url) = &project.url {
                output.push_str(&format!("url = {:?}\n", url));
            }
        }
        output
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# folio configuration

# Theme: terminal, midnight, paper
theme = {theme:?}

# ─────────────────────────────────────────────────────────────────────────────
# PAGE CONTENT
# ─────────────────────────────────────────────────────────────────────────────
[profile]
greeting = {greeting:?}
name = {name:?}
role = {role:?}
tagline = {tagline:?}
status = {status:?}
# Address shown and copied by both Email buttons (FOLIO_EMAIL overrides)
email = {email:?}
about = {about:?}
links = {links}
built_with = {built_with:?}

# ─────────────────────────────────────────────────────────────────────────────
# CONTACT WIDGET
# ─────────────────────────────────────────────────────────────────────────────
[contact]
heading = {heading:?}
blurb = {blurb:?}
# optimistic: always show "copied" (even if the clipboard refused)
# confirmed: show a failure notice when the clipboard refuses
copy_policy = "{copy_policy}"
# system: platform clipboard; memory: keep the text inside folio
clipboard = "{clipboard}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir:?}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix:?}
{projects}"#,
            theme = self.theme,
            greeting = self.profile.greeting,
            name = self.profile.name,
            role = self.profile.role,
            tagline = self.profile.tagline,
            status = self.profile.status,
            email = self.profile.email,
            about = self.profile.about,
            links = self.links_to_toml(),
            built_with = self.profile.built_with,
            heading = self.contact.heading,
            blurb = self.contact.blurb,
            copy_policy = self.contact.copy_policy.as_str(),
            clipboard = self.contact.clipboard.as_str(),
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
            projects = self.projects_to_toml(),
        )
    }
}
