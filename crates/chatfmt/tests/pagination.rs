//! Building and sending paged lists.

use chatfmt::text::ClickAction;
use chatfmt::Format;
use chatfmt_test::RecordingReceiver;

#[test]
fn test_sorted_pages_sent_in_order() {
    let format = Format::default();
    let mut list = format.list();
    list.title().stress("Warps");
    list.header().subdued("name");
    list.lines(2);
    for name in ["mine", "End", "base", "Farm"] {
        list.line().info(name);
    }
    list.sort(true);

    let pages = list.build();
    assert_eq!(pages.page_count(), 2);

    let alex = RecordingReceiver::new();
    pages.send_to(&alex);
    let sent = alex.plain();
    assert!(sent[0].contains(" Warps "));
    assert_eq!(sent[1], "name");
    assert_eq!(&sent[2..4], &["base", "End"]);
    assert_eq!(sent[4], " 1/2 »");

    alex.clear();
    assert!(pages.send_page(&alex, 2));
    assert_eq!(&alex.plain()[2..4], &["Farm", "mine"]);
    assert!(!pages.send_page(&alex, 3));
}

#[test]
fn test_navigation_links_change_page() {
    let mut list = Format::default().list();
    list.lines(1);
    list.line().info("a");
    list.line().info("b");

    let pages = list.build();
    let alex = RecordingReceiver::new();
    pages.send_to(&alex);

    let nav = alex.messages().pop().unwrap();
    let next = nav.children().last().unwrap();
    assert_eq!(next.click(), Some(&ClickAction::ChangePage(2)));
}

#[test]
fn test_unsorted_keeps_insertion_order() {
    let mut list = Format::default().list();
    for name in ["c", "a", "b"] {
        list.line().info(name);
    }
    let pages = list.build();
    let lines: Vec<String> = pages.contents().iter().map(|t| t.to_plain()).collect();
    assert_eq!(lines, ["c", "a", "b"]);
}
