// Fossil collection table with comparison highlighting and sharing.
use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::{
    BrowserLocation, BrowserStore, append, append_text, copy_to_clipboard, document, element,
    event_attr, listen, notify, set_attr,
};
use crate::catalogue::{self, FossilRecord};
use crate::config::AppConfig;
use crate::i18n::{MessageCatalog, MessageId, StaticMessages};
use crate::tracker::{CollectionTracker, CountDisplay, Highlight, RowView, TrackerAction};
use crate::{Error, Result};

type Tracker = CollectionTracker<BrowserStore, BrowserLocation>;

struct FossilPage {
    root: Element,
    tracker: Tracker,
    fossils: &'static [FossilRecord],
    messages: StaticMessages,
}

thread_local! {
    static FOSSIL_PAGE: RefCell<Option<FossilPage>> = const { RefCell::new(None) };
}

pub(super) fn mount(root: &Element, config: &AppConfig) -> Result<()> {
    let fossils = catalogue::fossils();
    let tracker = CollectionTracker::load(
        BrowserStore::open()?,
        BrowserLocation::current()?,
        fossils.len(),
        config.tracker_settings(),
    );
    let page = FossilPage {
        root: root.clone(),
        tracker,
        fossils,
        messages: StaticMessages::new(config.language),
    };
    render(&page)?;
    FOSSIL_PAGE.with(|cell| *cell.borrow_mut() = Some(page));

    listen(root, "click", |evt| {
        let Some((button, action)) = event_attr(&evt, "data-action") else {
            return;
        };
        let row = button
            .get_attribute("data-row")
            .and_then(|r| r.parse::<usize>().ok());
        let action = match (action.as_str(), row) {
            ("inc", Some(row)) => TrackerAction::Increment(row),
            ("dec", Some(row)) => TrackerAction::Decrement(row),
            ("share", _) => {
                share();
                return;
            }
            _ => return,
        };
        dispatch(action);
    })?;

    // blur does not bubble; focusout does.
    listen(root, "focusout", |evt| {
        let Some((field, name)) = event_attr(&evt, "data-field") else {
            return;
        };
        let Ok(input) = field.dyn_into::<HtmlInputElement>() else {
            return;
        };
        let text = input.value();
        // Re-rendering detaches the focused input, which fires focusout while
        // the page is still borrowed; that event carries nothing new.
        let unchanged = FOSSIL_PAGE.with(|cell| match cell.try_borrow() {
            Ok(guard) => guard.as_ref().map_or(true, |page| match name.as_str() {
                "compare" => page.tracker.compare_text() == text,
                _ => page.tracker.mine_text() == text,
            }),
            Err(_) => true,
        });
        if unchanged {
            return;
        }
        match name.as_str() {
            "compare" => dispatch(TrackerAction::SetCompare(text)),
            "mine" => dispatch(TrackerAction::SetMine(text)),
            _ => {}
        }
    })
}

/// Applies `action`, re-renders, then tells the user about rejected input.
/// A rejected action leaves the tracker as it was; the re-render also
/// restores the edited field to the retained value.
fn dispatch(action: TrackerAction) {
    let rejected = FOSSIL_PAGE.with(|cell| {
        let mut guard = cell.borrow_mut();
        let page = guard.as_mut()?;
        let rejected = page.tracker.apply(action).err().map(|err| {
            log::warn!("rejected: {err}");
            format!("{}: {err}", page.messages.text(MessageId::InvalidInput))
        });
        if let Err(err) = render(page) {
            log::error!("fossil view render failed: {err}");
        }
        rejected
    });
    if let Some(message) = rejected {
        notify(&message);
    }
}

fn share() {
    let Some((url, copied)) = FOSSIL_PAGE.with(|cell| {
        cell.borrow().as_ref().map(|page| {
            (
                page.tracker.share_url(),
                page.messages.text(MessageId::Copied).to_string(),
            )
        })
    }) else {
        return;
    };
    let result = copy_to_clipboard(&url, move |outcome| report_share(outcome, &copied));
    if let Err(err) = result {
        report_share(Err(err), "");
    }
}

fn report_share(outcome: Result<()>, copied: &str) {
    match outcome {
        Ok(()) => notify(copied),
        Err(err) => {
            log::error!("share failed: {err}");
            notify(&err.to_string());
        }
    }
}

fn render(page: &FossilPage) -> Result<()> {
    let doc = document()?;
    let msg = &page.messages;
    page.root.set_inner_html("");

    let compare_field = text_field(
        &doc,
        msg.text(MessageId::CompareField),
        "compare",
        &page.tracker.compare_text(),
    )?;
    append(&page.root, &compare_field)?;

    let mine_field = text_field(
        &doc,
        msg.text(MessageId::MineField),
        "mine",
        &page.tracker.mine_text(),
    )?;
    let share = append_text(&doc, &mine_field, "button", msg.text(MessageId::Share))?;
    set_attr(&share, "data-action", "share")?;
    set_attr(&share, "title", msg.text(MessageId::Share))?;
    append(&page.root, &mine_field)?;

    let table = element(&doc, "table")?;
    set_attr(&table, "class", "ia-table")?;
    let head = element(&doc, "tr")?;
    for id in [
        MessageId::ColumnName,
        MessageId::ColumnPrice,
        MessageId::ColumnOwned,
        MessageId::ColumnCompare,
    ] {
        append_text(&doc, &head, "th", msg.text(id))?;
    }
    append(&table, &head)?;
    for row in page.tracker.rows() {
        let Some(record) = page.fossils.get(row.index) else {
            return Err(Error::RowOutOfRange {
                index: row.index,
                len: page.fossils.len(),
            });
        };
        append(&table, &fossil_row(&doc, record, row, page)?)?;
    }
    append(&page.root, &table)
}

fn text_field(doc: &Document, label: &str, name: &str, value: &str) -> Result<Element> {
    let wrap = element(doc, "div")?;
    set_attr(&wrap, "class", "ia-field")?;
    let label_el = append_text(doc, &wrap, "label", label)?;
    let input: HtmlInputElement = element(doc, "input")?
        .dyn_into()
        .map_err(|_| Error::Dom("input is not an HtmlInputElement".into()))?;
    input.set_value(value);
    set_attr(&input, "data-field", name)?;
    append(&label_el, &input)?;
    Ok(wrap)
}

fn fossil_row(
    doc: &Document,
    record: &FossilRecord,
    row: RowView,
    page: &FossilPage,
) -> Result<Element> {
    let msg = &page.messages;
    let tr = element(doc, "tr")?;
    match row.highlight {
        Highlight::MineOnly => set_attr(&tr, "class", "ia-row-mine-only")?,
        Highlight::TheirsOnly => set_attr(&tr, "class", "ia-row-theirs-only")?,
        Highlight::Neutral => {}
    }
    append_text(doc, &tr, "td", record.name(msg.language))?;
    append_text(doc, &tr, "td", &record.price.to_string())?;

    let owned = element(doc, "td")?;
    let index = row.index.to_string();
    let dec = append_text(doc, &owned, "button", "−")?;
    set_attr(&dec, "data-action", "dec")?;
    set_attr(&dec, "data-row", &index)?;
    set_attr(&dec, "title", msg.text(MessageId::Subtract))?;
    count_cell(doc, &owned, row.mine)?;
    let inc = append_text(doc, &owned, "button", "+")?;
    set_attr(&inc, "data-action", "inc")?;
    set_attr(&inc, "data-row", &index)?;
    set_attr(&inc, "title", msg.text(MessageId::Add))?;
    append(&tr, &owned)?;

    let compare = element(doc, "td")?;
    if let Some(display) = row.compare {
        count_cell(doc, &compare, display)?;
    }
    append(&tr, &compare)?;
    Ok(tr)
}

fn count_cell(doc: &Document, parent: &Element, display: CountDisplay) -> Result<()> {
    let (text, class) = match display {
        CountDisplay::NotOwned => ("✕".to_string(), "ia-not-owned"),
        CountDisplay::Owned => ("✓".to_string(), "ia-owned"),
        CountDisplay::Count(n) => (n.to_string(), "ia-count"),
        CountDisplay::Unknown => ("?".to_string(), "ia-unknown"),
    };
    let span = append_text(doc, parent, "span", &text)?;
    set_attr(&span, "class", class)
}
