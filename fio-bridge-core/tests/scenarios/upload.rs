use crate::setup::TestBench;
use fio_bridge_core::{FsReader, UploadItem, UploadReport, UploadStreamer};

pub async fn async_test(mut bench: TestBench) {
    bench.settle().await;

    let dir = tempfile::TempDir::new().unwrap();
    let mut items = Vec::new();
    let files = vec![
        ("a.txt", b"alpha".to_vec()),
        ("b.png", vec![0x89, b'P', b'N', b'G']),
    ];
    for (name, contents) in files {
        let path = dir.path().join(name);
        tokio::fs::write(&path, contents).await.unwrap();
        items.push(UploadItem::from_path(&path).await.unwrap());
    }

    assert_eq!(items[1].mime_type.as_deref(), Some("image/png"));

    let report = UploadStreamer::new(FsReader)
        .stream(items, Some(bench.dispatcher.module().port()))
        .await;
    assert_eq!(
        report,
        UploadReport {
            sent: 2,
            dropped: 0,
            failed: 0
        }
    );

    bench.settle().await;
    let mut uploads = bench.state.lock().unwrap().uploads.clone();
    uploads.sort();
    assert_eq!(uploads, vec![b"alpha".to_vec(), vec![0x89, b'P', b'N', b'G']]);
}
