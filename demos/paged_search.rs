// Example: a simulated adapter that owns the clock, the async source and the viewport.
use std::collections::VecDeque;

use typeahead::{
    Autocomplete, AutocompleteOptions, FocusTarget, Item, LoadOutcome, LoadRequest, ModelValue,
    Selection, VisibleRange,
};

/// 1000 rows, filtered by case-insensitive substring, then paged.
fn load_items(skip: usize, take: usize, search: &str) -> Vec<Item> {
    let needle = search.to_lowercase();
    (0..1000u64)
        .map(|i| Item::new(i, format!("Project {i}")))
        .filter(|it| it.title.to_lowercase().contains(&needle))
        .skip(skip)
        .take(take)
        .collect()
}

/// Requests resolve 200 ms after they are issued, in issue order.
struct SlowSource {
    pending: VecDeque<(u64, LoadRequest)>,
}

impl SlowSource {
    fn dispatch(&mut self, req: Option<LoadRequest>, now_ms: u64) {
        if let Some(req) = req {
            println!(
                "  -> loadItems(skip={}, take={}, search={:?})",
                req.skip, req.take, req.search
            );
            self.pending.push_back((now_ms + 200, req));
        }
    }

    fn poll(&mut self, ac: &mut Autocomplete<Item>, now_ms: u64) {
        while self.pending.front().is_some_and(|(due, _)| *due <= now_ms) {
            let Some((_, req)) = self.pending.pop_front() else {
                break;
            };
            let page = load_items(req.skip, req.take, &req.search);
            match ac.resolve_load(&req, Ok(page)) {
                LoadOutcome::Applied { appended, exhausted } => println!(
                    "  <- page skip={} appended={appended} exhausted={exhausted} total={}",
                    req.skip,
                    ac.items().len()
                ),
                LoadOutcome::Stale => println!("  <- page skip={} discarded (stale)", req.skip),
                LoadOutcome::Failed => println!("  <- page skip={} failed", req.skip),
            }
        }
    }
}

fn main() {
    let opts = AutocompleteOptions::new("Choose a project")
        .with_min_item_size(36)
        .with_multiple(true)
        .with_chip(true)
        .with_model_value(ModelValue::Many(vec![
            Item::new(1, "Project 1"),
            Item::new(2, "Project 2"),
        ]))
        .with_on_change(Some(|sel: &Selection<Item>| {
            let ids: Vec<u64> = sel.iter().map(|it| it.id).collect();
            println!("  selection-changed: {ids:?}");
        }));

    let mut ac = match Autocomplete::new(opts) {
        Ok(ac) => ac,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };
    let mut source = SlowSource {
        pending: VecDeque::new(),
    };

    // The viewport shows 8 rows of `estimate_size` each.
    let viewport_rows = 288 / ac.estimate_size(0) as usize;

    println!("t=0 mount");
    source.dispatch(ac.mount(), 0);
    println!("preselected rows before first page: {}", ac.items().len());

    println!("t=0 focus");
    source.dispatch(ac.on_focus_in(), 0);

    let mut now_ms = 0u64;
    let script: &[(u64, &str)] = &[(300, "Pro"), (450, "Project 4"), (3000, "Project 42")];
    let mut script = script.iter().peekable();

    while now_ms <= 5000 {
        if let Some((at, text)) = script.peek().copied().copied() {
            if at == now_ms {
                println!("t={now_ms} input {text:?}");
                ac.on_input(text, now_ms);
                script.next();
            }
        }

        source.dispatch(ac.tick(now_ms), now_ms);
        source.poll(&mut ac, now_ms);

        // Scroll to the bottom of whatever is loaded; this keeps prefetching pages.
        let len = ac.items().len();
        let range = VisibleRange::new(len.saturating_sub(viewport_rows), len);
        source.dispatch(ac.on_visible_range(range), now_ms);

        now_ms += 50;
    }

    if let Some(first) = ac.items().get(0).cloned() {
        println!("select {:?}", first.title);
        ac.select_item(first);
    }
    println!("chips: {:?}", ac.selected_titles().collect::<Vec<_>>());

    ac.on_focus_out(FocusTarget::Inside);
    println!("after inside blur: open={}", ac.is_menu_open());
    ac.on_focus_out(FocusTarget::Outside);
    println!("after outside blur: open={}", ac.is_menu_open());
    println!("state: {:?}", ac.state());
}
