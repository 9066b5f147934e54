use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pod_energy_plot::data::analysis::{energy_from_eigenvalues, EnergySummary};
use pod_energy_plot::data::loader::DEFAULT_ENERGY_FILE;

const HEADER: [&str; 4] = [
    "Basis#",
    "Individual_Energy_in_Basis(%)",
    "Cummulative_Energy_in_Basis_upto_Current_Basis(%)",
    " Eigen_Values",
];

/// Write a synthetic podEnergy.csv from a decaying eigenvalue spectrum
#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
struct Args {
    /// Output file
    #[arg(default_value = DEFAULT_ENERGY_FILE)]
    output: PathBuf,

    /// Number of POD modes (snapshots)
    #[arg(short, long, default_value_t = 40)]
    modes: usize,

    /// e-folding length of the spectrum, in modes
    #[arg(long, default_value_t = 4.0)]
    decay: f64,

    /// Relative noise applied to each eigenvalue
    #[arg(long, default_value_t = 0.05)]
    noise: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Seeded SplitMix64 stream; enough for reproducible sample noise.
struct NoiseSource {
    counter: u64,
    spare: Option<f64>,
}

impl NoiseSource {
    const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

    fn new(seed: u64) -> Self {
        NoiseSource {
            counter: seed,
            spare: None,
        }
    }

    fn next_bits(&mut self) -> u64 {
        self.counter = self.counter.wrapping_add(Self::GOLDEN_GAMMA);
        let mut z = self.counter;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform sample in `[-1, 1)`.
    fn symmetric_unit(&mut self) -> f64 {
        (self.next_bits() >> 11) as f64 * (2.0 / (1u64 << 53) as f64) - 1.0
    }

    /// Standard normal sample (Marsaglia polar method, pairs cached).
    fn standard_normal(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }
        loop {
            let (u, v) = (self.symmetric_unit(), self.symmetric_unit());
            let r2 = u * u + v * v;
            if r2 > 0.0 && r2 < 1.0 {
                let factor = (-2.0 * r2.ln() / r2).sqrt();
                self.spare = Some(v * factor);
                return u * factor;
            }
        }
    }
}

/// Exponentially decaying eigenvalues with multiplicative noise, largest first.
fn eigen_spectrum(modes: usize, decay: f64, noise: f64, rng: &mut NoiseSource) -> Vec<f64> {
    let mut eigs: Vec<f64> = (0..modes)
        .map(|i| {
            let clean = (-(i as f64) / decay).exp();
            (clean * (1.0 + noise * rng.standard_normal())).max(f64::MIN_POSITIVE)
        })
        .collect();
    eigs.sort_by(|a, b| b.total_cmp(a));
    eigs
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    anyhow::ensure!(args.modes > 0, "--modes must be at least 1");
    anyhow::ensure!(args.decay > 0.0, "--decay must be positive");

    let mut rng = NoiseSource::new(args.seed);
    let table = energy_from_eigenvalues(&eigen_spectrum(args.modes, args.decay, args.noise, &mut rng));

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writer.write_record(HEADER)?;
    for row in table.rows() {
        writer.write_record(&[
            row.basis_number.to_string(),
            row.per_mode_energy.to_string(),
            row.cumulative_energy.to_string(),
            row.eigenvalue.to_string(),
        ])?;
    }
    writer.flush()?;

    println!(
        "Wrote {} modes to {} ({})",
        table.len(),
        args.output.display(),
        EnergySummary::of(&table)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spectrum_is_positive_and_descending() {
        let eigs = eigen_spectrum(30, 4.0, 0.2, &mut NoiseSource::new(7));
        assert_eq!(eigs.len(), 30);
        assert!(eigs.iter().all(|&e| e > 0.0));
        assert!(eigs.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn same_seed_same_spectrum() {
        let a = eigen_spectrum(10, 3.0, 0.05, &mut NoiseSource::new(42));
        let b = eigen_spectrum(10, 3.0, 0.05, &mut NoiseSource::new(42));
        let c = eigen_spectrum(10, 3.0, 0.05, &mut NoiseSource::new(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn normal_samples_are_centred() {
        let mut rng = NoiseSource::new(1);
        let n = 20_000;
        let mean = (0..n).map(|_| rng.standard_normal()).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean {mean}");
    }
}
