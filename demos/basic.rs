// Example: loop decision, rotation and paging without any UI.
use carousel::{Carousel, CarouselOptions};

#[derive(Clone, Debug)]
struct Card {
    id: u64,
    name: &'static str,
}

fn main() {
    let cards = vec![
        Card { id: 1, name: "headphones" },
        Card { id: 2, name: "keyboard" },
        Card { id: 3, name: "mouse" },
        Card { id: 4, name: "monitor" },
        Card { id: 5, name: "webcam" },
    ];

    // capacity 2 -> more cards than fit, so the strip loops (base length 15)
    let mut c = Carousel::new(cards, CarouselOptions::new(2, |card: &Card| card.id));
    println!("loop_enabled={} base_len={}", c.loop_enabled(), c.len());

    c.move_left();
    println!("effective_offset={}", c.effective_offset());

    let mut head = Vec::new();
    c.for_each_visible(|slot| {
        if head.len() < 4 {
            head.push(format!("{} ({})", slot.carousel_id, slot.item.name));
        }
    });
    println!("visible head: {head:?}");

    c.move_right();
    println!("back home: effective_offset={}", c.effective_offset());
}
