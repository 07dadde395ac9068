use crate::setup::TestBench;
use fio_bridge_core::{CommandBuilder, RenderEvent};

pub async fn async_test(mut bench: TestBench) {
    bench.settle().await;
    bench.take_events();
    bench
        .state
        .lock()
        .unwrap()
        .remote
        .insert(String::from("6.bmp"), String::from("BM\nraw\npixels"));

    bench
        .send(CommandBuilder::fetch_url("6.bmp", "/ignored").unwrap())
        .await;
    bench.settle().await;

    assert_eq!(
        bench.take_events(),
        vec![
            RenderEvent::Log(String::from("6.bmp")),
            RenderEvent::Log(String::from("Save success")),
        ]
    );
    assert_eq!(
        bench.state.lock().unwrap().files.get("/6.bmp").map(String::as_str),
        Some("BM\nraw\npixels")
    );

    // A body holding the field separator survives the relay intact
    bench
        .state
        .lock()
        .unwrap()
        .remote
        .insert(String::from("table.html"), String::from("<td>a|b</td>\n"));
    bench
        .send(CommandBuilder::fetch_url("table.html", "/ignored").unwrap())
        .await;
    bench.settle().await;

    assert_eq!(
        bench.take_events(),
        vec![
            RenderEvent::Log(String::from("table.html")),
            RenderEvent::Log(String::from("Save success")),
        ]
    );
    assert_eq!(
        bench
            .state
            .lock()
            .unwrap()
            .files
            .get("/table.html")
            .map(String::as_str),
        Some("<td>a|b</td>\n")
    );

    // The module answers an unknown resource without a newline, which is
    // dropped without a save
    bench
        .send(CommandBuilder::fetch_url("missing.bmp", "/ignored").unwrap())
        .await;
    bench.settle().await;

    assert!(bench.take_events().is_empty());
    assert_eq!(bench.state.lock().unwrap().files.len(), 2);
}
