//! Utilities for interaction of agents and environments.
pub mod test;
use crate::{preprocess::to_gray_image, EpisodicEnv, Policy};
use anyhow::Result;
use log::info;
use ndarray::ArrayView2;
use std::path::Path;

/// A policy choosing actions uniformly at random.
pub struct RandomPolicy {
    n_acts: usize,
}

impl RandomPolicy {
    pub fn new(n_acts: usize) -> Self {
        assert!(n_acts > 0, "no action to choose from");
        Self { n_acts }
    }
}

impl<E: EpisodicEnv> Policy<E> for RandomPolicy {
    fn sample(&mut self, _: &E::State) -> usize {
        fastrand::usize(..self.n_acts)
    }
}

/// Runs episodes with a policy and returns the sum of rewards of each episode.
///
/// Each episode starts with [`EpisodicEnv::initialize`].
pub fn eval<E, P>(env: &mut E, policy: &mut P, n_episodes: usize) -> Result<Vec<i32>>
where
    E: EpisodicEnv,
    P: Policy<E>,
{
    let mut rs = Vec::with_capacity(n_episodes);

    for ix in 0..n_episodes {
        env.initialize()?;
        let mut r_sum = 0;
        let mut steps = 0;
        while !env.is_terminal() {
            let a = policy.sample(&env.state());
            r_sum += env.receive_action(a)?;
            steps += 1;
        }
        info!("Episode {}: return = {}, steps = {}", ix, r_sum, steps);
        rs.push(r_sum);
    }

    Ok(rs)
}

/// Saves a normalized observation frame as a grayscale PNG image.
pub fn save_png(frame: ArrayView2<f32>, path: impl AsRef<Path>) -> Result<()> {
    to_gray_image(frame).save(path)?;
    Ok(())
}
