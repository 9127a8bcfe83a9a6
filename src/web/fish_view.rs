// Fish table with month / habitat / size filter bars.
use std::cell::RefCell;

use strum::IntoEnumIterator;
use web_sys::{Document, Element};

use super::{append, append_text, document, element, event_attr, listen, set_attr};
use crate::Result;
use crate::catalogue::{self, Habitat, Month, Size, SpeciesRecord};
use crate::config::AppConfig;
use crate::filter::{FilterState, FilterToggle, FishView};
use crate::i18n::{
    MessageCatalog, MessageId, StaticMessages, describe_appear_times, describe_month_range,
};

struct FishPage {
    root: Element,
    view: FishView<'static>,
    messages: StaticMessages,
}

thread_local! {
    static FISH_PAGE: RefCell<Option<FishPage>> = const { RefCell::new(None) };
}

pub(super) fn mount(root: &Element, config: &AppConfig) -> Result<()> {
    let view = FishView::new(catalogue::fish(), FilterState::for_today());
    log::info!(
        "fish view: {} of {} species visible",
        view.visible().len(),
        catalogue::fish().len()
    );
    let page = FishPage {
        root: root.clone(),
        view,
        messages: StaticMessages::new(config.language),
    };
    render(&page)?;
    FISH_PAGE.with(|cell| *cell.borrow_mut() = Some(page));

    listen(root, "click", |evt| {
        let Some((_, key)) = event_attr(&evt, "data-toggle") else {
            return;
        };
        let Some(toggle) = FilterToggle::from_key(&key) else {
            log::warn!("unknown filter key {key:?}");
            return;
        };
        FISH_PAGE.with(|cell| {
            if let Some(page) = cell.borrow_mut().as_mut() {
                page.view.toggle(toggle);
                if let Err(err) = render(page) {
                    log::error!("fish view render failed: {err}");
                }
            }
        });
    })
}

fn render(page: &FishPage) -> Result<()> {
    let doc = document()?;
    let msg = &page.messages;
    let filter = page.view.filter();
    page.root.set_inner_html("");

    filter_bar(
        &doc,
        &page.root,
        Month::all().map(|m| (FilterToggle::Month(m), msg.month(m))),
        filter,
    )?;
    filter_bar(
        &doc,
        &page.root,
        Habitat::iter().map(|h| {
            (
                FilterToggle::Habitat(h),
                msg.text(MessageId::Habitat(h)).to_string(),
            )
        }),
        filter,
    )?;
    filter_bar(
        &doc,
        &page.root,
        Size::iter().map(|s| {
            (
                FilterToggle::Size(s),
                msg.text(MessageId::Size(s)).to_string(),
            )
        }),
        filter,
    )?;

    let table = element(&doc, "table")?;
    set_attr(&table, "class", "ia-table")?;
    let head = element(&doc, "tr")?;
    let columns = [
        (MessageId::ColumnName, false),
        (MessageId::ColumnLivingMonths, filter.month_filtered()),
        (MessageId::ColumnAppearTime, false),
        (MessageId::ColumnHabitat, filter.habitat_filtered()),
        (MessageId::ColumnSize, filter.size_filtered()),
        (MessageId::ColumnPrice, false),
    ];
    for (id, filtered) in columns {
        let th = append_text(&doc, &head, "th", msg.text(id))?;
        set_attr(&th, "data-filtered", if filtered { "true" } else { "false" })?;
    }
    append(&table, &head)?;
    for record in page.view.visible() {
        append(&table, &fish_row(&doc, record, msg)?)?;
    }
    append(&page.root, &table)
}

fn filter_bar(
    doc: &Document,
    root: &Element,
    items: impl Iterator<Item = (FilterToggle, String)>,
    filter: &FilterState,
) -> Result<()> {
    let bar = element(doc, "div")?;
    set_attr(&bar, "class", "ia-filters")?;
    for (toggle, label) in items {
        let button = append_text(doc, &bar, "button", &label)?;
        set_attr(&button, "data-toggle", &toggle.key())?;
        set_attr(
            &button,
            "aria-pressed",
            if filter.is_enabled(toggle) { "true" } else { "false" },
        )?;
    }
    append(root, &bar)
}

fn fish_row(doc: &Document, record: &SpeciesRecord, msg: &StaticMessages) -> Result<Element> {
    let tr = element(doc, "tr")?;
    append_text(doc, &tr, "td", record.name)?;

    let seasons = element(doc, "td")?;
    for range in record.living_months {
        append_text(doc, &seasons, "div", &describe_month_range(*range, msg))?;
    }
    append(&tr, &seasons)?;

    let times = element(doc, "td")?;
    for line in describe_appear_times(record, msg) {
        append_text(doc, &times, "div", &line)?;
    }
    append(&tr, &times)?;

    append_text(doc, &tr, "td", msg.text(MessageId::Habitat(record.habitat)))?;
    append_text(doc, &tr, "td", msg.text(MessageId::Size(record.size)))?;
    append_text(doc, &tr, "td", &record.price.to_string())?;
    Ok(tr)
}
