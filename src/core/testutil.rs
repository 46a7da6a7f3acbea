// Synthetic EA3 buffers for tests

use crate::core::constants::*;
use encoding_rs::SHIFT_JIS;

pub fn sjis(text: &str) -> Vec<u8> {
    let (bytes, _, _) = SHIFT_JIS.encode(text);
    bytes.into_owned()
}

pub fn length_prefixed(bytes: &[u8]) -> Vec<u8> {
    let mut out = (bytes.len() as u32).to_le_bytes().to_vec();
    out.extend_from_slice(bytes);
    out
}

pub struct Ea3Builder {
    raw_point_count: u32,
    sampling_rate: u16,
    channel_count: u8,
    samples: Vec<(i16, i16)>,
    trailer: Vec<u8>,
}

impl Ea3Builder {
    pub fn new(raw_point_count: u32) -> Self {
        Self {
            raw_point_count,
            sampling_rate: 1000,
            channel_count: 1,
            samples: Vec::new(),
            trailer: Vec::new(),
        }
    }

    /// Header with `rawPointCount = pairs + 1` and the given samples.
    pub fn with_samples(samples: &[(i16, i16)]) -> Self {
        let mut builder = Self::new(samples.len() as u32 + 1);
        builder.samples = samples.to_vec();
        builder
    }

    pub fn sampling_rate(mut self, rate: u16) -> Self {
        self.sampling_rate = rate;
        self
    }

    pub fn channels(mut self, count: u8) -> Self {
        self.channel_count = count;
        self
    }

    pub fn separator(mut self) -> Self {
        self.trailer.extend(SEPARATOR_MARKER.to_le_bytes());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.trailer.extend(length_prefixed(&sjis(text)));
        self
    }

    pub fn raw_trailer(mut self, bytes: &[u8]) -> Self {
        self.trailer.extend_from_slice(bytes);
        self
    }

    pub fn header_only(&self) -> Vec<u8> {
        let mut header = vec![0u8; HEADER_SIZE];
        header[RAW_POINT_COUNT_OFFSET..RAW_POINT_COUNT_OFFSET + 4]
            .copy_from_slice(&self.raw_point_count.to_le_bytes());
        header[SAMPLING_RATE_OFFSET..SAMPLING_RATE_OFFSET + 2]
            .copy_from_slice(&self.sampling_rate.to_le_bytes());
        header[CHANNEL_COUNT_OFFSET] = self.channel_count;
        header
    }

    pub fn build(&self) -> Vec<u8> {
        let mut data = self.header_only();
        for (x, y) in &self.samples {
            data.extend(x.to_le_bytes());
            data.extend(y.to_le_bytes());
        }
        data.extend_from_slice(&self.trailer);
        data
    }
}
