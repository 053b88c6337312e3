// Example: a host list view wiring PinnedSectionList into its event loop.
use pinned_sections::{
    Canvas, ChangeObserver, ClipRect, Constraint, Frame, HeaderClassifier, ListGeometry,
    ListLayout, PinnedView, PinningOptions, ScrollWindow, SectionAdapter, Size, ViewType,
};
use pinned_sections_adapter::{PinnedSectionList, ScrollState};

const ROW_HEIGHT: u32 = 30;
const HEADER_HEIGHT: u32 = 20;

static IS_HEADER: fn(ViewType) -> bool = |t| t == 1;

struct Cell(usize);

impl PinnedView for Cell {
    fn measure(&mut self, width: Constraint, height: Constraint) -> Size {
        Size {
            width: width.size(),
            height: height.size().min(HEADER_HEIGHT),
        }
    }
}

/// Every tenth item is a header.
struct Log {
    count: usize,
    observers: Vec<ChangeObserver>,
}

impl Log {
    fn append(&mut self, n: usize) {
        self.count += n;
        for o in &self.observers {
            o.notify_changed();
        }
    }
}

impl SectionAdapter for Log {
    type View = Cell;

    fn count(&self) -> usize {
        self.count
    }

    fn item_view_type(&self, position: usize) -> ViewType {
        u32::from(position % 10 == 0)
    }

    fn view_type_count(&self) -> usize {
        2
    }

    fn view(&self, position: usize, _reuse: Option<Cell>) -> Cell {
        Cell(position)
    }

    fn classifier(&self) -> Option<&dyn HeaderClassifier> {
        Some(&IS_HEADER)
    }

    fn register_observer(&mut self, observer: ChangeObserver) {
        self.observers.push(observer);
    }

    fn unregister_observer(&mut self, observer: &ChangeObserver) {
        self.observers.retain(|o| !o.same_as(observer));
    }
}

struct Host {
    count: usize,
    offset: i64,
    geometry: ListGeometry,
}

impl Host {
    fn height(position: usize) -> i64 {
        if position % 10 == 0 {
            HEADER_HEIGHT as i64
        } else {
            ROW_HEIGHT as i64
        }
    }

    fn top_of(&self, position: usize) -> i64 {
        (0..position).map(Self::height).sum::<i64>() - self.offset
    }

    fn window(&self) -> ScrollWindow {
        let mut first = None;
        let mut count = 0;
        for i in 0..self.count {
            let top = self.top_of(i);
            if top >= self.geometry.height as i64 {
                break;
            }
            if top + Self::height(i) > 0 {
                first.get_or_insert(i);
                count += 1;
            }
        }
        ScrollWindow::new(first.unwrap_or(0), count, self.count)
    }
}

impl ListLayout for Host {
    fn geometry(&self) -> ListGeometry {
        self.geometry
    }

    fn child_top(&self, position: usize) -> Option<i32> {
        let w = self.window();
        (w.first_visible..w.first_visible + w.visible_count)
            .contains(&position)
            .then(|| self.top_of(position) as i32)
    }

    fn first_visible_position(&self) -> usize {
        self.window().first_visible
    }
}

struct Screen;

impl Canvas<Cell> for Screen {
    fn save(&mut self) {}

    fn clip_rect(&mut self, clip: ClipRect) {
        println!("    clip {clip:?}");
    }

    fn draw_view(&mut self, view: &Cell, frame: Frame) {
        println!("    header #{} at y={}", view.0, frame.top);
    }

    fn restore(&mut self) {}
}

fn main() {
    let mut list = PinnedSectionList::new(PinningOptions::new().with_strict(true));
    list.set_scroll_observer(Some(Box::new(|w: ScrollWindow| {
        println!("  observer: first_visible={}", w.first_visible);
    })));
    if let Err(err) = list.set_adapter(Some(Log {
        count: 60,
        observers: Vec::new(),
    })) {
        eprintln!("adapter rejected: {err}");
        return;
    }

    let mut host = Host {
        count: 60,
        offset: 0,
        geometry: ListGeometry::new(240, 120),
    };

    list.on_scroll_state_changed(ScrollState::TouchScroll);
    for offset in (0..=400).step_by(50) {
        host.offset = offset;
        println!("offset={offset}");
        list.on_scroll(&host, host.window());
        list.dispatch_draw(&host, &mut Screen);
    }
    list.on_scroll_state_changed(ScrollState::Idle);

    // New data arrives: pinned sections are dropped until the next scroll.
    if let Some(log) = list.adapter_mut() {
        log.append(10);
        host.count = log.count;
    }
    println!("after append: pinned={:?}", list.pinned_positions());

    // Simulate a configuration change restoring the scroll position.
    list.on_restore_instance_state();
    list.on_idle(&host);
    println!("after restore: pinned={:?}", list.pinned_positions());
}
