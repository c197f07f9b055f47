use crate::commands::{CmdMessage, CmdResult, PageView};
use crate::error::Result;
use crate::model::Record;
use crate::pager::Pager;

/// Slices out the page `pager` currently points at.
pub fn run(records: &[Record], pager: &Pager) -> Result<CmdResult> {
    if records.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("The phonebook is empty."));
        return Ok(result);
    }

    // A pager built for a longer sequence must not index past the end.
    let range = pager.range();
    let end = range.end.min(records.len());
    let start = range.start.min(end);

    let view = PageView {
        page: pager.page(),
        total_pages: pager.total_pages(),
        records: records[start..end].to_vec(),
    };
    Ok(CmdResult::default().with_page(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    fn records(n: usize) -> Vec<Record> {
        StoreFixture::new().with_records(n).store.load().unwrap()
    }

    #[test]
    fn first_page_holds_first_ten() {
        let records = records(25);
        let pager = Pager::new(records.len(), 10);

        let view = run(&records, &pager).unwrap().page.unwrap();

        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.records.len(), 10);
        assert_eq!(view.records[0].last_name, "Contact1");
        assert_eq!(view.records[9].last_name, "Contact10");
    }

    #[test]
    fn last_page_holds_remainder() {
        let records = records(25);
        let mut pager = Pager::new(records.len(), 10);
        pager.next();
        pager.next();

        let view = run(&records, &pager).unwrap().page.unwrap();

        assert_eq!(view.page, 3);
        assert_eq!(view.records.len(), 5);
        assert_eq!(view.records[0].last_name, "Contact21");
        assert_eq!(view.records[4].last_name, "Contact25");
    }

    #[test]
    fn oversized_pager_is_clamped_to_records() {
        let records = records(5);
        let mut pager = Pager::new(30, 10);
        pager.next();

        let view = run(&records, &pager).unwrap().page.unwrap();
        assert_eq!(view.page, 2);
        assert!(view.records.is_empty());

        let first = run(&records, &Pager::new(30, 10)).unwrap().page.unwrap();
        assert_eq!(first.records.len(), 5);
    }

    #[test]
    fn empty_book_reports_instead_of_paging() {
        let result = run(&[], &Pager::new(0, 10)).unwrap();
        assert!(result.page.is_none());
        assert_eq!(result.messages[0].content, "The phonebook is empty.");
    }
}
