use std::path::{Path, PathBuf};

use tapedeck::library::Selection;
use tapedeck::prefs::Theme;

/// Command line: `tapedeck [--shuffle] [--covers] [--theme=light|dark] [--filter=QUERY] [PATH...]`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub paths: Vec<PathBuf>,
    pub shuffle: bool,
    pub covers: bool,
    pub theme: Option<Theme>,
    pub filter: Option<String>,
}

impl Args {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut out = Args::default();
        for arg in args {
            if arg == "--shuffle" {
                out.shuffle = true;
            } else if arg == "--covers" {
                out.covers = true;
            } else if let Some(v) = arg.strip_prefix("--theme=") {
                out.theme = Some(match v {
                    "light" => Theme::Light,
                    "dark" => Theme::Dark,
                    other => return Err(format!("unknown theme: {other}")),
                });
            } else if let Some(v) = arg.strip_prefix("--filter=") {
                out.filter = Some(v.to_string());
            } else if arg.starts_with("--") {
                return Err(format!("unknown option: {arg}"));
            } else {
                out.paths.push(PathBuf::from(arg));
            }
        }
        Ok(out)
    }

    /// A single directory is walked; anything else is treated as a manual
    /// file pick. No paths means the working directory. A single path that
    /// is not a file is walked too, so a missing folder reports as denied.
    pub fn selection(&self, cwd: &Path) -> Selection {
        match self.paths.as_slice() {
            [] => Selection::Directory(cwd.to_path_buf()),
            [one] if !one.is_file() => Selection::Directory(one.clone()),
            many => Selection::Files(many.to_vec()),
        }
    }
}
