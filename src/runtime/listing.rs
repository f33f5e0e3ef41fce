use tapedeck::metadata::Fallback;
use tapedeck::registry::{MetadataStatus, Track};

/// One playlist row: position, label and what artwork the shell would show.
pub fn format_row(position: usize, track: &Track) -> String {
    let art = match &track.cover {
        Some(cover) => format!("{}, {} bytes", cover.mime_type, cover.data.len()),
        None => {
            let f = Fallback::for_name(&track.display_name);
            format!("'{}' on hue {}", f.glyph, f.hue)
        }
    };
    let marker = match track.status {
        MetadataStatus::Unresolved => " (no tags)",
        _ => "",
    };
    format!("{:>4}. {}{}  [{}]", position + 1, track.label(), marker, art)
}
