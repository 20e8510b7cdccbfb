//! Delivering built messages to receivers, channels and the server.

use chatfmt::text::{ClickAction, HoverAction, ShiftClickAction};
use chatfmt::{args, ChatType, DisplayName, Format, TitleTimes};
use chatfmt_test::{RecordingChannel, RecordingReceiver, TestServer};

struct Player {
    name: &'static str,
}

impl DisplayName for Player {
    fn display_name(&self) -> String {
        self.name.to_string()
    }
}

#[test]
fn test_tell_sends_to_each_receiver() {
    let alex = RecordingReceiver::new();
    let sam = RecordingReceiver::new();
    let steve = Player { name: "Steve" };

    Format::default()
        .info_args("%s joined", &args![&steve])
        .tell(&alex)
        .tell_all([&alex, &sam]);

    assert_eq!(alex.plain(), vec!["Steve joined", "Steve joined"]);
    assert_eq!(sam.plain(), vec!["Steve joined"]);
}

#[test]
fn test_display_name_as_content() {
    let alex = RecordingReceiver::new();
    let steve = Player { name: "Steve" };

    Format::default().stress(&steve).info(" waves").tell(&alex);
    assert_eq!(alex.plain(), vec!["Steve waves"]);
}

#[test]
fn test_chat_types() {
    let alex = RecordingReceiver::new();
    let channel = RecordingChannel::new();

    let mut fmt = Format::default().fmt();
    fmt.subdued("saving...");
    fmt.tell_chat(ChatType::ActionBar, [&alex])
        .tell_channel_chat(ChatType::System, [&channel]);

    assert_eq!(alex.chat_types(), vec![ChatType::ActionBar]);
    assert_eq!(channel.messages()[0].0, ChatType::System);
}

#[test]
fn test_server_targets() {
    let server = TestServer::new();
    let format = Format::default();

    format.warn("disk almost full").log(&server);
    format.info("restart in 5m").broadcast(&server);
    format.error("tps low").tell_permitted(&server, "admin.alerts");

    assert_eq!(server.console().plain(), vec!["disk almost full"]);
    assert_eq!(server.broadcast().plain(), vec!["restart in 5m"]);
    assert_eq!(server.permitted("admin.alerts"), vec!["tps low"]);
    assert!(server.permitted("other").is_empty());
}

#[test]
fn test_actions_attach_to_message() {
    let alex = RecordingReceiver::new();
    let mut hover = Format::default().fmt();
    hover.subdued("click to teleport");

    let mut fmt = Format::default().fmt();
    fmt.stress("[home]")
        .command("/home %s", &args!["base"])
        .action(hover.to_hover())
        .insert("base", &[])
        .url("not a url")
        .tell(&alex);

    let message = &alex.messages()[0];
    assert_eq!(
        message.click(),
        Some(&ClickAction::RunCommand("/home base".to_string()))
    );
    assert!(matches!(message.hover(), Some(HoverAction::ShowText(_))));
    assert_eq!(
        message.shift_click(),
        Some(&ShiftClickAction::InsertText("base".to_string()))
    );
}

#[test]
fn test_two_part_title() {
    let alex = RecordingReceiver::new();
    let mut main = Format::default().fmt();
    main.stress("Round 3");
    let mut sub = main.subtitle();
    sub.subdued("fight!");
    sub.send_title(TitleTimes::fade(10, 40), [&alex]);

    let titles = alex.titles();
    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0].title.as_ref().map(|t| t.to_plain()).as_deref(), Some("Round 3"));
    assert_eq!(titles[0].subtitle.as_ref().map(|t| t.to_plain()).as_deref(), Some("fight!"));
    assert_eq!(titles[0].times.stay, Some(40));
}

#[test]
fn test_list_separators() {
    let format = Format::default();
    let names = ["a", "b", "c"];

    let message = format
        .info_list(names, ", ", |fmt, name| {
            fmt.stress(name);
        })
        .build();
    assert_eq!(message.to_plain(), "a, b, c");

    let single = format
        .info_list(["only"], ", ", |fmt, name| {
            fmt.stress(name);
        })
        .build();
    assert_eq!(single.to_plain(), "only");
}
