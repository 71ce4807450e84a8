// Example: a horizontal looping carousel driven the way a host UI would
// drive it — fling deltas fed into scroll_by, then a decider-resolved
// direction to bring a far-away card into view.
use looplist::{ItemProvider, LoopLayout, LoopLayoutOptions, Size, Viewport, deciders};

const CARD_WIDTH: i32 = 140;
const CARD_COUNT: usize = 8;

struct Cards {
    live: usize,
}

impl ItemProvider for Cards {
    type Handle = usize;

    fn create(&mut self, index: usize) -> usize {
        self.live += 1;
        index
    }

    fn measure(&mut self, _handle: &usize) -> Size {
        Size {
            width: CARD_WIDTH,
            height: 180,
        }
    }

    fn remove_and_recycle(&mut self, _handle: usize) {
        self.live -= 1;
    }
}

fn window(layout: &LoopLayout<usize>) -> Vec<usize> {
    layout.children().iter().map(|c| c.index()).collect()
}

fn main() {
    let mut provider = Cards { live: 0 };
    let options = LoopLayoutOptions::new(Viewport::new(400, 180))
        .with_orientation(looplist::Orientation::Horizontal);
    let mut layout = LoopLayout::new(options);
    layout.layout(CARD_COUNT, &mut provider);
    println!("initial window: {:?}", window(&layout));

    // A decaying fling to the left (content moves towards higher indices).
    let mut velocity = 260;
    while velocity > 0 {
        layout.scroll_by(velocity, &mut provider);
        velocity = velocity * 2 / 3;
        println!(
            "fling step: window={:?} live={}",
            window(&layout),
            provider.live
        );
    }

    // One full lap lands back on the same window.
    let lap = CARD_COUNT as i32 * CARD_WIDTH;
    layout.scroll_by(lap, &mut provider);
    println!("after a full lap: {:?}", window(&layout));

    // Ask the estimator which way card 6 is fastest to reach, then step
    // there the way a smooth scroller would.
    let target = 6;
    let direction = layout.direction_to(target).expect("carousel is laid out");
    println!("direction to card {target}: {direction:?}");
    while layout.find_item_at(target).is_none() {
        layout.scroll_by(direction.sign() * 40, &mut provider);
    }
    let card = layout.find_item_at(target).expect("card just scrolled in");
    println!(
        "card {target} attached at left={} (window {:?})",
        card.rect().left,
        window(&layout)
    );

    // The fixed decider always routes through the anchor edge instead.
    let via_anchor = layout
        .direction_to_with(target, deciders::towards_anchor_edge)
        .expect("carousel is laid out");
    println!("via anchor edge the route would be {via_anchor:?}");
}
