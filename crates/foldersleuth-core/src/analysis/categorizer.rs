/// File classification by extension.
///
/// Maps a file name to one of a fixed set of categories. The lookup table is
/// deliberately small and must stay stable: exported reports and saved
/// summaries are compared across runs by category label.
use serde::{Deserialize, Serialize};

/// The fixed classification enumeration.
///
/// Declaration order is the display order used by summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Image,
    Audio,
    Video,
    Document,
    Archive,
    Code,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Self::Image,
        Self::Audio,
        Self::Video,
        Self::Document,
        Self::Archive,
        Self::Code,
        Self::Other,
    ];

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Audio => "Audio",
            Self::Video => "Video",
            Self::Document => "Document",
            Self::Archive => "Archive",
            Self::Code => "Code",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Longest dotted extension in the table (`.docx`, `.html`, `.jpeg`).
const MAX_KNOWN_EXT: usize = 5;

/// Return the dotted extension of `name` as written (`"Photo.JPG"` → `".JPG"`).
///
/// Everything from the last `.` onwards. A dotfile with no further dot is its
/// own extension (`".gitignore"`); a name without any dot has none.
pub fn dotted_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) => &name[pos..],
        None => "",
    }
}

/// Classify a file name by its extension, case-insensitively.
///
/// Total and allocation-free: the extension is lowercased into a small stack
/// buffer, and anything longer than the longest known extension is `Other`
/// without further work.
pub fn categorize(name: &str) -> Category {
    let ext = dotted_extension(name).as_bytes();
    if ext.is_empty() || ext.len() > MAX_KNOWN_EXT {
        return Category::Other;
    }

    let mut lower = [0u8; MAX_KNOWN_EXT];
    for (dest, &src) in lower.iter_mut().zip(ext.iter()) {
        *dest = src.to_ascii_lowercase();
    }

    match &lower[..ext.len()] {
        b".png" | b".jpg" | b".jpeg" | b".gif" => Category::Image,
        b".mp3" | b".wav" => Category::Audio,
        b".mp4" | b".avi" | b".mov" => Category::Video,
        b".pdf" | b".docx" | b".txt" => Category::Document,
        b".zip" | b".rar" => Category::Archive,
        b".cs" | b".js" | b".html" => Category::Code,
        _ => Category::Other,
    }
}

/// `true` if renaming `old` to `new` changes the file's extension.
///
/// The front end asks for confirmation in that case before applying a rename.
pub fn extension_changed(old: &str, new: &str) -> bool {
    !dotted_extension(old).eq_ignore_ascii_case(dotted_extension(new))
}
