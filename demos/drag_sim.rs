// Example: one full drag gesture against the state machine, frame by frame.
use carousel::{DragMachine, DragOptions, PointerEvent};

fn main() {
    let mut drag = DragMachine::new(
        DragOptions::new()
            .with_enabled(true)
            .with_card_step_px(220.0)
            .with_item_count(30),
    );

    drag.pointer_down(&PointerEvent::touch(1, 0.0));
    for x in [-40.0, -130.0, -260.0] {
        drag.pointer_move(&PointerEvent::touch(1, x));
        if drag.needs_frame() {
            drag.on_frame();
            println!("preview: {:?}", drag.snapshot());
        }
    }

    let shift = drag.pointer_up(&PointerEvent::touch(1, -260.0));
    println!(
        "released: shift={shift:?} suppress_click={}",
        drag.should_suppress_click()
    );

    drag.on_frame();
    println!("settled: {:?}", drag.snapshot());
}
