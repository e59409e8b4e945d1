//! Overlapping connects against a toolkit whose teardown lags behind.

mod support;

use pd_platform::ToolkitFaults;

use support::{want, Fixture};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn burst_of_connects_never_shows_two_windows() {
    let fx = Fixture::new();
    fx.toolkit.set_faults(ToolkitFaults {
        destroy_yields: 8,
        ..Default::default()
    });

    for i in 0..32 {
        fx.ability.on_connect(&want(&format!("app-{i}"), "phone"));
    }
    fx.ability.wait_idle().await;

    assert!(fx.toolkit.max_visible() <= 1);
    let visible = fx.toolkit.visible_windows();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].params.as_ref().unwrap()["appName"], "app-31");
    assert_eq!(fx.toolkit.live_windows().len(), 1);
    assert_eq!(fx.ability.current_request().app_name, "app-31");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn interleaved_connects_and_waits_keep_singleton() {
    let fx = Fixture::new();
    fx.toolkit.set_faults(ToolkitFaults {
        destroy_yields: 3,
        ..Default::default()
    });

    for round in 0..10 {
        fx.ability.on_connect(&want(&format!("first-{round}"), "phone"));
        tokio::task::yield_now().await;
        fx.ability.on_connect(&want(&format!("second-{round}"), "phone"));
        fx.ability.wait_idle().await;

        let visible = fx.toolkit.visible_windows();
        assert_eq!(visible.len(), 1);
        assert_eq!(
            visible[0].params.as_ref().unwrap()["appName"],
            format!("second-{round}").as_str()
        );
    }

    assert_eq!(fx.toolkit.max_visible(), 1);
}
