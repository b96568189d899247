use md5::{Digest, Md5};

use crate::data::Pos;

/// Player and box positions. The walls and targets live in `Board`
/// since they never change during a search.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub player_pos: Pos,
    pub boxes: Vec<Pos>,
}

impl State {
    pub fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort(); // sort to detect equal states when we reorder boxes
        State { player_pos, boxes }
    }

    /// Canonical text form the fingerprint is computed from:
    /// player pos followed by the sorted box positions.
    fn key(&self) -> String {
        let mut key = self.player_pos.to_string();
        key.push('[');
        for (i, b) in self.boxes.iter().enumerate() {
            if i > 0 {
                key.push(',');
            }
            key.push_str(&b.to_string());
        }
        key.push(']');
        key
    }

    /// MD5 of the canonical form as 32 uppercase hex digits.
    /// Identifies the state in the visited set and in all output.
    pub fn fingerprint(&self) -> String {
        hex::encode_upper(Md5::digest(self.key().as_bytes()))
    }
}
