use crate::setup::TestBench;
use fio_bridge_core::{CommandBuilder, RenderEvent};

pub async fn async_test(mut bench: TestBench) {
    bench.settle().await;
    bench.take_events();

    bench.send(CommandBuilder::makedir("/docs").unwrap()).await;
    bench.send(CommandBuilder::list("/docs").unwrap()).await;
    bench.settle().await;

    assert_eq!(
        bench.take_events(),
        vec![
            RenderEvent::Log(String::from("Make directory success")),
            RenderEvent::List(vec![String::from("<empty directory>")]),
            RenderEvent::Log(String::from("List success")),
        ]
    );

    bench.send(CommandBuilder::save("/docs/b.txt", "b").unwrap()).await;
    bench
        .state
        .lock()
        .unwrap()
        .files
        .insert(String::from("/docs/a|z.txt"), String::from("a"));
    bench.send(CommandBuilder::list("/docs").unwrap()).await;
    bench.settle().await;

    // A name containing `|` comes back as two entries
    let listings: Vec<_> = bench
        .take_events()
        .into_iter()
        .filter_map(|e| match e {
            RenderEvent::List(x) => Some(x),
            _ => None,
        })
        .collect();
    assert_eq!(
        listings,
        vec![vec![
            String::from("a"),
            String::from("z.txt"),
            String::from("b.txt"),
        ]]
    );

    // Paths the module refuses are reported back as status lines
    bench.send(CommandBuilder::list("docs").unwrap()).await;
    bench.settle().await;
    assert_eq!(
        bench.take_events(),
        vec![RenderEvent::Log(String::from("File name must begin with /"))]
    );
}
