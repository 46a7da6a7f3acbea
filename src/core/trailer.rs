// Best-effort trailer: [separator] title_len title comment_len comment
//
// Firmware variants disagree on whether the separator is written, and the
// length prefixes are not always trustworthy. Nothing in here fails the
// decode: every problem degrades to empty or placeholder strings.

use crate::core::constants::*;
use crate::core::cursor::ByteCursor;
use crate::core::format::{Trailer, TrailerStop};
use encoding_rs::Encoding;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Separator,
    Title,
    Comment,
}

enum Next {
    Stage(Stage),
    Stop(TrailerStop),
}

/// Parse the trailer starting at the cursor. Always returns a value.
pub fn read_trailer(cursor: &mut ByteCursor<'_>, encoding: &'static Encoding) -> Trailer {
    let mut parser = TrailerParser {
        cursor,
        encoding,
        trailer: Trailer::default(),
    };

    let mut stage = Stage::Separator;
    loop {
        let next = match stage {
            Stage::Separator => parser.separator(),
            Stage::Title => parser.title(),
            Stage::Comment => parser.comment(),
        };

        match next {
            Next::Stage(s) => stage = s,
            Next::Stop(stop) => return parser.finish(stop),
        }
    }
}

struct TrailerParser<'c, 'a> {
    cursor: &'c mut ByteCursor<'a>,
    encoding: &'static Encoding,
    trailer: Trailer,
}

impl TrailerParser<'_, '_> {
    fn separator(&mut self) -> Next {
        match self.cursor.peek_u32_le() {
            None => Next::Stop(TrailerStop::MissingTitleLength),
            Some(SEPARATOR_MARKER) => {
                self.cursor.skip(LENGTH_PREFIX_SIZE);
                self.trailer.separator_found = true;
                Next::Stage(Stage::Title)
            }
            Some(other) => {
                // No separator: those 4 bytes are the title length.
                debug!("No trailer separator (got {:#010x})", other);
                Next::Stage(Stage::Title)
            }
        }
    }

    fn title(&mut self) -> Next {
        let Some(len) = self.cursor.read_u32_le() else {
            return Next::Stop(TrailerStop::MissingTitleLength);
        };

        if len >= TITLE_MAX_LEN {
            // Length bytes are not skipped; the comment prefix is read from here.
            warn!("Title length {} out of range, skipping title", len);
            self.trailer.title = CORRUPT_TITLE_PLACEHOLDER.to_string();
            return Next::Stage(Stage::Comment);
        }

        if len > 0 {
            match self.read_text(len) {
                Ok(text) => self.trailer.title = text,
                Err(cause) => return Next::Stop(TrailerStop::Fault(cause)),
            }
        }

        Next::Stage(Stage::Comment)
    }

    fn comment(&mut self) -> Next {
        let Some(len) = self.cursor.read_u32_le() else {
            return Next::Stop(TrailerStop::MissingCommentLength);
        };

        if len == 0 {
            return Next::Stop(TrailerStop::Complete);
        }

        if len >= COMMENT_MAX_LEN {
            debug!("Comment length {} out of range, leaving comment empty", len);
            return Next::Stop(TrailerStop::Complete);
        }

        match self.read_text(len) {
            Ok(text) => {
                self.trailer.comment = text;
                Next::Stop(TrailerStop::Complete)
            }
            Err(cause) => Next::Stop(TrailerStop::Fault(cause)),
        }
    }

    fn read_text(&mut self, len: u32) -> Result<String, String> {
        let len = len as usize;
        let available = self.cursor.remaining();
        let bytes = self
            .cursor
            .take(len)
            .ok_or_else(|| format!("declared {} bytes, {} available", len, available))?;

        let (text, had_errors) = self.encoding.decode_without_bom_handling(bytes);
        if had_errors {
            debug!("Invalid {} sequences replaced in trailer text", self.encoding.name());
        }

        Ok(text.into_owned())
    }

    fn finish(mut self, stop: TrailerStop) -> Trailer {
        if let TrailerStop::Fault(cause) = &stop {
            warn!("Trailer unreadable: {}", cause);
            self.trailer.title = format!("{}: {}>", TRAILER_ERROR_PREFIX, cause);
        }
        self.trailer.stop = stop;
        self.trailer
    }
}
