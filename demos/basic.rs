// Example: fill a looping viewport, scroll it, and jump across the seam.
use looplist::{ItemProvider, LoopLayout, LoopLayoutOptions, Size, Viewport};

/// Five fixed-height rows; the handle is just the adapter index.
struct Rows;

impl ItemProvider for Rows {
    type Handle = usize;

    fn create(&mut self, index: usize) -> usize {
        index
    }

    fn measure(&mut self, _handle: &usize) -> Size {
        Size {
            width: 80,
            height: 100,
        }
    }

    fn remove_and_recycle(&mut self, _handle: usize) {}
}

fn dump(label: &str, layout: &LoopLayout<usize>) {
    let rows: Vec<(usize, i32)> = layout
        .children()
        .iter()
        .map(|c| (c.index(), c.rect().top))
        .collect();
    println!(
        "{label}: top_left={} bottom_right={} rows={rows:?}",
        layout.top_left_index(),
        layout.bottom_right_index()
    );
}

fn main() {
    let mut provider = Rows;
    let mut layout = LoopLayout::new(LoopLayoutOptions::new(Viewport::new(80, 250)));

    layout.layout(5, &mut provider);
    dump("after layout", &layout);

    layout.scroll_by(120, &mut provider);
    dump("after scroll_by(120)", &layout);

    // Scrolling backwards crosses the seam: index 0 wraps to 4.
    layout.scroll_by(-300, &mut provider);
    dump("after scroll_by(-300)", &layout);

    println!("direction_to(2) = {:?}", layout.direction_to(2));

    layout.scroll_to_index(3);
    layout.layout(5, &mut provider);
    dump("after scroll_to_index(3)", &layout);
}
