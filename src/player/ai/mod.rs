pub mod config;
pub mod eval;
pub mod heuristic;
pub mod minimax;
pub mod random;

pub use heuristic::HeuristicAI;
pub use minimax::MinimaxAI;
pub use random::RandomAI;

use crate::core::{Difficulty, PlayerId};
use crate::player::PlayerController;

/// 難易度に対応するAIコントローラを生成する (PvP は AI なし)
pub fn create_ai(difficulty: Difficulty, player_id: PlayerId) -> Option<Box<dyn PlayerController>> {
    match difficulty {
        Difficulty::Random => Some(Box::new(RandomAI::new(player_id, "Random AI"))),
        Difficulty::Heuristic => Some(Box::new(HeuristicAI::new(player_id, "Heuristic AI"))),
        Difficulty::Adversarial => Some(Box::new(MinimaxAI::new(player_id, "Minimax AI"))),
        Difficulty::HumanVsHuman => None,
    }
}
