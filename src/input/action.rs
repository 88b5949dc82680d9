use crate::game::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    RotateRight,
    SoftDrop,
    Restart,
    Quit,
}

impl Action {
    /// Applies the action to the game. `Quit` is left to the caller.
    pub fn apply(self, game: &mut Game) {
        match self {
            Action::MoveLeft => {
                game.move_left();
            }
            Action::MoveRight => {
                game.move_right();
            }
            Action::RotateRight => {
                game.rotate_right();
            }
            Action::SoftDrop => {
                game.soft_drop();
            }
            Action::Restart => game.reset(),
            Action::Quit => {}
        }
    }
}
