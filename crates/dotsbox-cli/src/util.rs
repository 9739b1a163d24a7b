use std::{
    fs::{self, File},
    io::{self, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context;
use dotsbox_advisor::move_evaluator::HeuristicWeights;
use rand::SeedableRng as _;
use rand_pcg::Pcg32;

/// Writes `value` as pretty-printed JSON to `path`, creating parent directories as needed.
pub fn save_json<T>(value: &T, path: &Path) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    writeln!(writer).with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output to {}", path.display()))?;
    Ok(())
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Heuristic weights from `path`, or the built-in defaults.
pub fn load_weights(path: Option<&Path>) -> anyhow::Result<HeuristicWeights> {
    let Some(path) = path else {
        return Ok(HeuristicWeights::default());
    };
    let weights = read_json_file("heuristic weights", path)?;
    tracing::info!(path = %path.display(), ?weights, "loaded heuristic weights");
    Ok(weights)
}

/// Deterministic generator when `seed` is given, freshly seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> Pcg32 {
    match seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_json_creates_directories() {
        let dir = std::env::temp_dir().join(format!("dotsbox-util-{}", std::process::id()));
        let path = dir.join("nested").join("weights.json");
        let weights = HeuristicWeights {
            gift_penalty: -75,
            ..HeuristicWeights::default()
        };

        save_json(&weights, &path).unwrap();
        assert_eq!(load_weights(Some(&path)).unwrap(), weights);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_weights_defaults_and_errors() {
        assert_eq!(load_weights(None).unwrap(), HeuristicWeights::default());
        assert!(load_weights(Some(Path::new("/nonexistent/dotsbox/weights.json"))).is_err());
    }
}
