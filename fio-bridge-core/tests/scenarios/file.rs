use crate::setup::TestBench;
use fio_bridge_core::{CommandBuilder, RenderEvent};

pub async fn async_test(mut bench: TestBench) {
    bench.settle().await;
    bench.take_events();

    bench
        .send(CommandBuilder::save("/notes.txt", "Hello!\nThis is a test!\nGoodbye!").unwrap())
        .await;
    bench.send(CommandBuilder::load("/notes.txt").unwrap()).await;
    bench.settle().await;

    assert_eq!(
        bench.take_events(),
        vec![
            RenderEvent::Log(String::from("Save success")),
            RenderEvent::Text(String::from("Hello!\nThis is a test!\nGoodbye!")),
            RenderEvent::Log(String::from("Load success")),
        ]
    );

    // Split by the piped transport on the way out and back, then rejoined
    bench.send(CommandBuilder::save("/pipes.txt", "a|b|c").unwrap()).await;
    bench.send(CommandBuilder::load("/pipes.txt").unwrap()).await;
    bench.settle().await;
    assert!(bench
        .take_events()
        .contains(&RenderEvent::Text(String::from("a|b|c"))));

    bench.send(CommandBuilder::delete("/notes.txt").unwrap()).await;
    bench.send(CommandBuilder::load("/notes.txt").unwrap()).await;
    bench.send(CommandBuilder::delete("/notes.txt").unwrap()).await;
    bench.settle().await;

    assert_eq!(
        bench.take_events(),
        vec![
            RenderEvent::Log(String::from("Delete success")),
            RenderEvent::Log(String::from("Error: File not found -- Error #: -20")),
            RenderEvent::Log(String::from("File/Directory not found")),
        ]
    );
}
