//! Frame output system
//!
//! Writes each rendered frame as a numbered SVG file.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use hypersolid_render::{write_svg, Frame};

/// Writes `frame_0000.svg`, `frame_0001.svg`, ... into a directory
pub struct FrameWriter {
    directory: PathBuf,
    written: usize,
}

impl FrameWriter {
    /// Create the output directory if needed
    pub fn create<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        fs::create_dir_all(&directory)?;
        Ok(Self { directory, written: 0 })
    }

    /// Write the next frame, returning its path
    pub fn write(&mut self, frame: &Frame) -> io::Result<PathBuf> {
        let path = self.directory.join(format!("frame_{:04}.svg", self.written));
        let mut out = BufWriter::new(File::create(&path)?);
        write_svg(frame, &mut out)?;
        out.flush()?;

        self.written += 1;
        log::debug!("Wrote {}", path.display());
        Ok(path)
    }

    /// Number of frames written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// The output directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
