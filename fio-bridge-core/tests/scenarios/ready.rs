use crate::setup::TestBench;
use fio_bridge_core::RenderEvent;

pub async fn async_test(mut bench: TestBench) {
    assert_eq!(bench.settle().await, 1);

    assert_eq!(
        bench.take_events(),
        vec![
            RenderEvent::Log(String::from(
                "Allocated 5242880 bytes of persistent storage."
            )),
            RenderEvent::Log(String::from("Filesystem ready!")),
        ]
    );
}
