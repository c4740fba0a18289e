//! Interface between environments and agents.
use anyhow::Result;

/// An episodic environment with a discrete action space.
///
/// An episode starts with [`initialize`](Self::initialize). The agent then
/// calls [`receive_action`](Self::receive_action) until
/// [`is_terminal`](Self::is_terminal) becomes `true`.
pub trait EpisodicEnv {
    /// Observation of the environment.
    type State;

    /// The current observation.
    fn state(&self) -> Self::State;

    /// The reward of the last action.
    fn reward(&self) -> i32;

    /// Returns `true` if the current episode has ended.
    fn is_terminal(&self) -> bool;

    /// The number of actions; valid action indices are `0..number_of_actions()`.
    fn number_of_actions(&self) -> usize;

    /// Applies an action and returns the reward.
    ///
    /// Panics if the episode has already ended.
    fn receive_action(&mut self, action: usize) -> Result<i32>;

    /// Starts a new episode.
    fn initialize(&mut self) -> Result<()>;
}

/// A policy on an environment.
///
/// Policy is a mapping from a state to an action index.
pub trait Policy<E: EpisodicEnv> {
    /// Sample an action given a state.
    fn sample(&mut self, state: &E::State) -> usize;
}
