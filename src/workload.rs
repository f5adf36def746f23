//! Sample and randomly generated process sets.
//!
//! Random workloads take the RNG as a parameter so callers (and tests) can
//! seed them for reproducibility.

use rand::Rng;

use crate::models::Process;

/// The built-in five-process demo workload.
pub fn sample_processes() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 5).with_priority(2),
        Process::new("P2", 1, 3).with_priority(1),
        Process::new("P3", 2, 8).with_priority(3),
        Process::new("P4", 3, 6).with_priority(1),
        Process::new("P5", 4, 2).with_priority(2),
    ]
}

/// Shape of a random workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival time.
    pub max_arrival: u64,
    /// Inclusive burst time range (minimum clamped to 1).
    pub burst_range: (u64, u64),
    /// Inclusive priority range. `None` leaves priorities unset.
    pub priority_range: Option<(i32, i32)>,
}

impl WorkloadSpec {
    /// Creates a workload shape for `count` processes arriving in `0..=10` with bursts `1..=10`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            burst_range: (1, 10),
            priority_range: None,
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: u64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst time range.
    pub fn with_burst_range(mut self, min: u64, max: u64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = Some((min, max));
        self
    }

    /// Generates processes named `P1..Pn`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let burst_min = self.burst_range.0.max(1);
        let burst_max = self.burst_range.1.max(burst_min);

        (1..=self.count)
            .map(|n| {
                let mut p = Process::new(
                    format!("P{n}"),
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(burst_min..=burst_max),
                );
                if let Some((lo, hi)) = self.priority_range {
                    p.priority = Some(rng.random_range(lo.min(hi)..=hi.max(lo)));
                }
                p
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_is_valid() {
        let sample = sample_processes();
        assert_eq!(sample.len(), 5);
        assert!(validate_processes(&sample).is_ok());
    }

    #[test]
    fn test_generate_respects_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        let spec = WorkloadSpec::new(50)
            .with_max_arrival(5)
            .with_burst_range(2, 4)
            .with_priority_range(-1, 1);
        let processes = spec.generate(&mut rng);

        assert_eq!(processes.len(), 50);
        assert!(validate_processes(&processes).is_ok());
        for p in &processes {
            assert!(p.arrival_time <= 5);
            assert!((2..=4).contains(&p.burst_time));
            assert!(p.priority.is_some_and(|v| (-1..=1).contains(&v)));
        }
    }

    #[test]
    fn test_generate_clamps_zero_burst() {
        let mut rng = SmallRng::seed_from_u64(7);
        let processes = WorkloadSpec::new(10).with_burst_range(0, 0).generate(&mut rng);
        assert!(processes.iter().all(|p| p.burst_time == 1 && p.priority.is_none()));
    }

    #[test]
    fn test_generate_is_seed_deterministic() {
        let spec = WorkloadSpec::new(6);
        let a = spec.generate(&mut SmallRng::seed_from_u64(1));
        let b = spec.generate(&mut SmallRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
