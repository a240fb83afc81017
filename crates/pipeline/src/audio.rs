//! WAV encode/decode helpers.
//!
//! Everything moves through the service as mono f32 samples; WAV bytes are
//! produced only at the persistence and HTTP boundaries.

use std::io::Cursor;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::PipelineError;

/// Encode mono samples as a 16-bit PCM WAV byte stream.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, PipelineError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)
            .map_err(|e| PipelineError::Audio(e.to_string()))?;
        for &sample in samples {
            let clamped = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer
                .write_sample(clamped)
                .map_err(|e| PipelineError::Audio(e.to_string()))?;
        }
        writer
            .finalize()
            .map_err(|e| PipelineError::Audio(e.to_string()))?;
    }

    Ok(cursor.into_inner())
}

/// Decode a WAV byte stream into mono f32 samples and its sample rate.
///
/// Multi-channel input is averaged down to mono.
pub fn decode_wav(bytes: &[u8]) -> Result<(Vec<f32>, u32), PipelineError> {
    let mut reader =
        WavReader::new(Cursor::new(bytes)).map_err(|e| PipelineError::Audio(e.to_string()))?;
    let spec = reader.spec();

    let samples: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(|e| PipelineError::Audio(e.to_string()))?,
        (SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .map(|s| s.map(|v| v as f32 / i16::MAX as f32))
            .collect::<Result<_, _>>()
            .map_err(|e| PipelineError::Audio(e.to_string()))?,
        (format, bits) => {
            return Err(PipelineError::Audio(format!(
                "unsupported wav format: {format:?}/{bits}-bit"
            )));
        }
    };

    let samples = if spec.channels > 1 {
        downmix(&samples, spec.channels as usize)
    } else {
        samples
    };

    Ok((samples, spec.sample_rate))
}

fn downmix(interleaved: &[f32], channels: usize) -> Vec<f32> {
    interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        let samples: Vec<f32> = (0..220).map(|i| (i as f32 / 220.0).sin() * 0.5).collect();
        let bytes = encode_wav(&samples, 22_050).unwrap();

        let (decoded, rate) = decode_wav(&bytes).unwrap();
        assert_eq!(rate, 22_050);
        assert_eq!(decoded.len(), samples.len());
        for (a, b) in samples.iter().zip(decoded.iter()) {
            assert!((a - b).abs() < 1.0e-3);
        }
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(decode_wav(&[0u8; 16]).is_err());
        assert!(decode_wav(&[]).is_err());
    }

    #[test]
    fn stereo_is_downmixed() {
        let spec = WavSpec {
            channels: 2,
            sample_rate: 16_000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
            for _ in 0..100 {
                writer.write_sample(i16::MAX).unwrap();
                writer.write_sample(0i16).unwrap();
            }
            writer.finalize().unwrap();
        }

        let (samples, rate) = decode_wav(&cursor.into_inner()).unwrap();
        assert_eq!(rate, 16_000);
        assert_eq!(samples.len(), 100);
        assert!((samples[0] - 0.5).abs() < 1.0e-2);
    }
}
