use crate::core::{Board, PlayerId, Position};
use crate::player::PlayerController;
use rand::seq::SliceRandom;

/// 空点から一様ランダムに選ぶAI
pub struct RandomAI {
    pub name: String,
}

impl RandomAI {
    pub fn new(_player_id: PlayerId, name: &str) -> Self {
        RandomAI {
            name: name.to_string(),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, _board: &Board, legal_moves: &[Position]) -> Option<Position> {
        let mut rng = rand::thread_rng();
        legal_moves.choose(&mut rng).copied()
    }
}
