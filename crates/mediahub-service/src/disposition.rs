//! MIME-type based `Content-Disposition` selection.

use mediahub_core::config::media::DownloadConfig;
use mediahub_core::traits::DispositionResolver;
use mediahub_core::types::DispositionType;

/// Resolves a disposition from configured inline and attachment MIME lists.
///
/// The inline list is checked first. Entries match case-insensitively and
/// may use a `type/*` wildcard.
#[derive(Debug, Clone)]
pub struct MimeDispositionResolver {
    default: DispositionType,
    inline: Vec<String>,
    attachment: Vec<String>,
}

impl MimeDispositionResolver {
    /// Creates a resolver from explicit lists.
    pub fn new(default: DispositionType, inline: Vec<String>, attachment: Vec<String>) -> Self {
        let normalize =
            |list: Vec<String>| list.into_iter().map(|m| m.trim().to_lowercase()).collect();
        Self {
            default,
            inline: normalize(inline),
            attachment: normalize(attachment),
        }
    }

    /// Creates a resolver from the download configuration.
    pub fn from_config(config: &DownloadConfig) -> Self {
        Self::new(
            config.default_disposition,
            config.inline_mime_types.clone(),
            config.attachment_mime_types.clone(),
        )
    }
}

fn matches(pattern: &str, mime_type: &str) -> bool {
    match pattern.strip_suffix("/*") {
        Some(major) => mime_type
            .split_once('/')
            .is_some_and(|(kind, _)| kind == major),
        None => pattern == mime_type,
    }
}

impl DispositionResolver for MimeDispositionResolver {
    fn get_by_mime_type(&self, mime_type: &str) -> DispositionType {
        // Parameters such as `; charset=utf-8` never take part in matching.
        let essence = mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        if self.inline.iter().any(|p| matches(p, &essence)) {
            DispositionType::Inline
        } else if self.attachment.iter().any(|p| matches(p, &essence)) {
            DispositionType::Attachment
        } else {
            self.default
        }
    }
}
