use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::player::MusicBackend;

/// Loops a music file on the default output device.
pub struct RodioBackend {
    // Dropping the stream stops all audio.
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
    path: PathBuf,
    queued: bool,
}

impl RodioBackend {
    /// Open the default output device. The file is only read on `play`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("no default audio output device")?;
        let sink = Sink::try_new(&handle).context("failed to create audio sink")?;
        sink.pause();
        Ok(Self {
            _stream: stream,
            _handle: handle,
            sink,
            path: path.as_ref().to_path_buf(),
            queued: false,
        })
    }
}

impl MusicBackend for RodioBackend {
    fn play(&mut self) -> Result<()> {
        if !self.queued {
            let file = File::open(&self.path)
                .with_context(|| format!("failed to open {}", self.path.display()))?;
            let source = Decoder::new(BufReader::new(file))
                .with_context(|| format!("failed to decode {}", self.path.display()))?;
            self.sink.append(source.repeat_infinite());
            self.queued = true;
        }
        self.sink.play();
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
    }
}
