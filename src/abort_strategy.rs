/// Enum with possible abort strategies.
/// These strategies specify when the Lloyd loop of a single trial stops. After every pass, the strategy is
/// fed the summed absolute movement of all centers during that pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AbortStrategy {
	/// Run until a pass does not move any center at all (summed movement is exactly `0.0`).
	CentersUnchanged,
	/// Same as [`AbortStrategy::CentersUnchanged`], but give up after **max_passes** passes, even if the
	/// centers are still moving. Protects against floating point round-off oscillation.
	/// ## Fields:
	/// - **max_passes**: Maximum amount of passes per trial (at least 1)
	CentersUnchangedOrPassLimit { max_passes: usize },
}
impl Default for AbortStrategy {
	fn default() -> Self { AbortStrategy::CentersUnchanged }
}
impl AbortStrategy {
	pub(crate) fn create_logic(&self) -> Box<dyn AbortStrategyLogic> {
		match *self {
			AbortStrategy::CentersUnchanged => Box::new(CentersUnchangedLogic),
			AbortStrategy::CentersUnchangedOrPassLimit { max_passes } => Box::new(PassLimitLogic {
				max_passes,
				passes: 0
			})
		}
	}
}

pub(crate) trait AbortStrategyLogic {
	/// Function that has to be called once a pass of the calculation ended, and the center movement was calculated.
	/// ## Arguments
	/// - **movement**: Summed absolute difference between the centers before and after the pass
	/// ## Returns
	/// - **true** if the calculation should continue
	/// - **false** if the calculation should stop
	fn next(&mut self, movement: f64) -> bool;
}


pub(crate) struct CentersUnchangedLogic;
impl AbortStrategyLogic for CentersUnchangedLogic {
	fn next(&mut self, movement: f64) -> bool {
		movement != 0.0
	}
}


pub(crate) struct PassLimitLogic {
	max_passes: usize,
	passes: usize
}
impl AbortStrategyLogic for PassLimitLogic {
	fn next(&mut self, movement: f64) -> bool {
		self.passes += 1;
		movement != 0.0 && self.passes < self.max_passes
	}
}
