use crate::config::{Config, Entropy, GenerateConfig};
use std::io::Write;
use ulidgen::{
    GenerationStream, OsRandom, RandSource, SystemClock, ThreadRandom, decode_time, is_valid,
    try_decode_time, validate,
};

/// Runs one invocation, writing results line by line to `out`.
///
/// Returns `Ok(false)` when an inspected input was rejected, which the
/// binary turns into a non-zero exit status.
///
/// # Errors
/// Entropy failures while generating and write failures on `out`.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<bool> {
    match config {
        Config::Generate(config) => {
            match config.entropy {
                Entropy::Os => generate(config, OsRandom, out)?,
                Entropy::Thread => generate(config, ThreadRandom, out)?,
            }
            Ok(true)
        }
        Config::Validate(ulids) => {
            let mut all_valid = true;
            for s in ulids {
                let valid = is_valid(s);
                if !valid {
                    tracing::debug!(input = %s, reason = ?validate(s).err(), "rejected");
                }
                all_valid &= valid;
                writeln!(out, "{valid}")?;
            }
            Ok(all_valid)
        }
        Config::DecodeTime(ulids) => {
            let mut all_decoded = true;
            for s in ulids {
                match decode_time(s) {
                    Some(ms) => writeln!(out, "{ms}")?,
                    None => {
                        let reason = try_decode_time(s).err();
                        tracing::debug!(input = %s, ?reason, "no timestamp");
                        all_decoded = false;
                        writeln!(out)?;
                    }
                }
            }
            Ok(all_decoded)
        }
    }
}

fn generate<R: RandSource>(
    config: &GenerateConfig,
    rng: R,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut stream = GenerationStream::new(SystemClock, rng);
    for _ in 0..config.count {
        let id = stream.generate(config.seed)?;
        if config.lowercase {
            writeln!(out, "{}", id.as_str().to_ascii_lowercase())?;
        } else {
            writeln!(out, "{id}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_lines(config: &Config) -> (bool, Vec<String>) {
        let mut out = Vec::new();
        let ok = run(config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        (ok, text.lines().map(str::to_owned).collect())
    }

    fn generate_config(seed: Option<u64>, count: usize) -> GenerateConfig {
        GenerateConfig {
            seed,
            count,
            entropy: Entropy::Thread,
            lowercase: false,
        }
    }

    #[test]
    fn generates_increasing_ids_for_a_seed() {
        let (ok, lines) = run_to_lines(&Config::Generate(generate_config(Some(1_000), 50)));

        assert!(ok);
        assert_eq!(lines.len(), 50);
        assert!(lines.windows(2).all(|w| w[0] < w[1]));
        for line in &lines {
            assert!(is_valid(line));
            assert_eq!(decode_time(line), Some(1_000));
        }
    }

    #[test]
    fn generates_for_now_without_seed() {
        let before = ulidgen::TimeSource::current_millis(&SystemClock);
        let (_, lines) = run_to_lines(&Config::Generate(GenerateConfig {
            entropy: Entropy::Os,
            ..generate_config(None, 1)
        }));

        let ms = decode_time(&lines[0]).unwrap();
        assert!(ms >= before);
    }

    #[test]
    fn lowercase_output_stays_valid() {
        let (_, lines) = run_to_lines(&Config::Generate(GenerateConfig {
            lowercase: true,
            ..generate_config(Some(1_469_918_176_385), 2)
        }));

        for line in &lines {
            assert!(line.starts_with("01aryz6s41"));
            assert!(is_valid(line));
        }
    }

    #[test]
    fn validate_reports_each_input() {
        let config = Config::Validate(vec![
            "01ARYZ6S41TSV4RRFFQ69G5FAV".into(),
            "short".into(),
            "8ZZZZZZZZZZZZZZZZZZZZZZZZZ".into(),
        ]);

        let (ok, lines) = run_to_lines(&config);

        assert!(!ok);
        assert_eq!(lines, ["true", "false", "false"]);
    }

    #[test]
    fn decode_time_reports_each_input() {
        let config = Config::DecodeTime(vec![
            "01ARYZ6S41TSV4RRFFQ69G5FAV".into(),
            "".into(),
            "7ZZZZZZZZZZZZZZZZZZZZZZZZZ".into(),
        ]);

        let (ok, lines) = run_to_lines(&config);

        assert!(!ok);
        assert_eq!(lines, ["1469918176385", "", "281474976710655"]);
    }

    #[test]
    fn all_valid_inputs_succeed() {
        let (ok, _) = run_to_lines(&Config::Validate(vec!["01aryz6s41tsv4rrffq69g5fav".into()]));
        assert!(ok);
        let (ok, _) = run_to_lines(&Config::DecodeTime(vec!["01ARYZ6S41TSV4RRFFQ69G5FAV".into()]));
        assert!(ok);
    }
}
