//! Verbose transcript of hashing steps, written to stderr.

use crate::hashing::Digest;
use crate::inputs::Input;

pub(crate) struct Transcript {
    enabled: bool,
    started: bool,
}

impl Transcript {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            started: false,
        }
    }

    pub(crate) fn note(&mut self, message: impl AsRef<str>) {
        if !self.enabled {
            return;
        }
        self.start();
        eprintln!("- {}", message.as_ref());
    }

    pub(crate) fn opening(&mut self, input: &Input) {
        match input {
            Input::Stdin => self.note("reading standard input"),
            Input::File(path) => self.note(format!("opening {}", path.display())),
        }
    }

    pub(crate) fn hashed(&mut self, input: &Input, digest: &Digest) {
        let blocks = digest.bytes / sha256_stream::BLOCK_LEN as u64;
        self.note(format!(
            "{}: {} bytes, {} full blocks, sha256 {}",
            input.label(),
            digest.bytes,
            blocks,
            digest.sha256
        ));
    }

    fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        eprintln!("transcript:");
    }
}
