// Example: drive a PinningController from a simulated list and print the pinned band.
use pinned_sections::{
    Canvas, ClipRect, Constraint, Frame, HeaderClassifier, ListGeometry, ListLayout, PinnedView,
    PinnedViewTypes, PinningController, ScrollWindow, SectionAdapter, SectionIndexer, Size,
    ViewType,
};

const ROW: ViewType = 0;
const HEADER: ViewType = 1;

struct Row {
    label: String,
    height: u32,
}

impl PinnedView for Row {
    fn height_intent(&self) -> Option<Constraint> {
        Some(Constraint::Exact(self.height))
    }

    fn measure(&mut self, width: Constraint, height: Constraint) -> Size {
        Size {
            width: width.size(),
            height: height.size(),
        }
    }
}

/// Contacts grouped by initial: one header per letter, then its names.
struct Contacts {
    types: Vec<ViewType>,
    labels: Vec<String>,
    section_starts: Vec<usize>,
    pinned: PinnedViewTypes,
}

impl Contacts {
    fn new(names: &[&str]) -> Self {
        let mut types = Vec::new();
        let mut labels = Vec::new();
        let mut section_starts = Vec::new();
        let mut current = None;
        for name in names {
            let initial = name.chars().next().unwrap_or('#');
            if current != Some(initial) {
                current = Some(initial);
                section_starts.push(types.len());
                types.push(HEADER);
                labels.push(initial.to_string());
            }
            types.push(ROW);
            labels.push(name.to_string());
        }
        Self {
            types,
            labels,
            section_starts,
            pinned: PinnedViewTypes::single(HEADER),
        }
    }

    fn height_of(&self, position: usize) -> u32 {
        if self.types[position] == HEADER { 24 } else { 48 }
    }
}

impl SectionIndexer for Contacts {
    fn section_for_position(&self, position: usize) -> usize {
        self.section_starts
            .partition_point(|&start| start <= position)
            .saturating_sub(1)
    }

    fn position_for_section(&self, section: usize) -> usize {
        self.section_starts.get(section).copied().unwrap_or(0)
    }
}

impl SectionAdapter for Contacts {
    type View = Row;

    fn count(&self) -> usize {
        self.types.len()
    }

    fn item_view_type(&self, position: usize) -> ViewType {
        self.types[position]
    }

    fn view_type_count(&self) -> usize {
        2
    }

    fn view(&self, position: usize, reuse: Option<Row>) -> Row {
        reuse.unwrap_or_else(|| Row {
            label: self.labels[position].clone(),
            height: self.height_of(position),
        })
    }

    fn classifier(&self) -> Option<&dyn HeaderClassifier> {
        Some(&self.pinned)
    }

    fn section_indexer(&self) -> Option<&dyn SectionIndexer> {
        Some(self)
    }
}

/// A list scrolled by a pixel offset.
struct Viewport {
    heights: Vec<u32>,
    offset: i64,
    geometry: ListGeometry,
}

impl Viewport {
    fn top_of(&self, position: usize) -> i64 {
        self.heights[..position].iter().map(|&h| h as i64).sum::<i64>() - self.offset
    }

    fn window(&self) -> ScrollWindow {
        let mut first = None;
        let mut count = 0;
        for (i, &h) in self.heights.iter().enumerate() {
            let top = self.top_of(i);
            if top >= self.geometry.height as i64 {
                break;
            }
            if top + h as i64 > 0 {
                first.get_or_insert(i);
                count += 1;
            }
        }
        ScrollWindow::new(first.unwrap_or(0), count, self.heights.len())
    }
}

impl ListLayout for Viewport {
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

struct Printer;

impl Canvas<Row> for Printer {
    fn save(&mut self) {}

    fn clip_rect(&mut self, _clip: ClipRect) {}

    fn draw_view(&mut self, view: &Row, frame: Frame) {
        println!("  pinned {:>8} at y={} h={}", view.label, frame.top, frame.height);
    }

    fn restore(&mut self) {}
}

fn main() {
    let contacts = Contacts::new(&[
        "Ada", "Alan", "Alonzo", "Barbara", "Bjarne", "Brian", "Dennis", "Donald", "Edsger",
        "Grace", "Guido", "Ken", "Leslie", "Linus", "Margaret", "Niklaus", "Robin", "Tony",
    ]);
    let mut list = Viewport {
        heights: (0..contacts.count()).map(|p| contacts.height_of(p)).collect(),
        offset: 0,
        geometry: ListGeometry::new(360, 200),
    };
    let mut controller = PinningController::default();

    for offset in (0..=600).step_by(60) {
        list.offset = offset;
        let window = list.window();
        controller.on_scroll(&contacts, &list, window);
        println!(
            "offset={offset} first_visible={} pinned={:?}",
            window.first_visible,
            controller.pinned().positions().collect::<Vec<_>>()
        );
        controller.draw(&list.geometry(), &mut Printer);
    }
}
