//! Embedded assets for EduAI
//!
//! Uses rust-embed to bundle icons at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Component assets first, then ours
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(Self::iter().filter_map(|p| p.starts_with(path).then(|| p.into())));

        Ok(files)
    }
}

/// Icons not shipped with gpui-component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomIconName {
    Video,
    Play,
    Pause,
    SkipBack,
    SkipForward,
    Volume,
    VolumeX,
    /// Transcript toggle
    Captions,
    MessageCircle,
    FileText,
    /// Notes library
    BookOpen,
    /// App logo
    GraduationCap,
    Sparkles,
    Send,
    Image,
    Brain,
    Download,
    Save,
    Clock,
    RotateCcw,
}

impl CustomIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::Video => "icons/video.svg",
            CustomIconName::Play => "icons/play.svg",
            CustomIconName::Pause => "icons/pause.svg",
            CustomIconName::SkipBack => "icons/skip-back.svg",
            CustomIconName::SkipForward => "icons/skip-forward.svg",
            CustomIconName::Volume => "icons/volume.svg",
            CustomIconName::VolumeX => "icons/volume-x.svg",
            CustomIconName::Captions => "icons/captions.svg",
            CustomIconName::MessageCircle => "icons/message-circle.svg",
            CustomIconName::FileText => "icons/file-text.svg",
            CustomIconName::BookOpen => "icons/book-open.svg",
            CustomIconName::GraduationCap => "icons/graduation-cap.svg",
            CustomIconName::Sparkles => "icons/sparkles.svg",
            CustomIconName::Send => "icons/send.svg",
            CustomIconName::Image => "icons/image.svg",
            CustomIconName::Brain => "icons/brain.svg",
            CustomIconName::Download => "icons/download.svg",
            CustomIconName::Save => "icons/save.svg",
            CustomIconName::Clock => "icons/clock.svg",
            CustomIconName::RotateCcw => "icons/rotate-ccw.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_icons_are_embedded() {
        let icons = [
            CustomIconName::Video,
            CustomIconName::Play,
            CustomIconName::Pause,
            CustomIconName::Captions,
            CustomIconName::BookOpen,
            CustomIconName::GraduationCap,
            CustomIconName::RotateCcw,
        ];
        for icon in icons {
            let path = icon.path();
            assert!(Assets::get(&path).is_some(), "missing {path}");
        }
    }
}
