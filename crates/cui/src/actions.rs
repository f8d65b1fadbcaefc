use crate::app::App;
use crate::input::InputAction;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::MoveLeft => app.move_cursor(false),
        InputAction::MoveRight => app.move_cursor(true),
        InputAction::ToggleSelect => app.toggle_selected(),
        InputAction::ClearSelection => app.clear_selection(),
        InputAction::Submit => app.submit(),
        InputAction::NewPuzzle => app.new_puzzle(),
        InputAction::NextLevel => app.cycle_level(true),
        InputAction::PrevLevel => app.cycle_level(false),
        InputAction::StartRun => app.start_run(),
        InputAction::ResetRun => app.reset_run(),
    }
}
