//! End-to-end onboarding tests
//!
//! Drive the selection flow against real stores and check what the main
//! navigator mounts with the result.

use rove::app_core::{FlowState, OnboardingError, SelectionFlow, Symbol};
use rove::app_ui::{Destination, MainNavigator, NavigationError, RouteParams};
use rove::{complete_onboarding, launch, Launch};
use std::sync::Arc;
use storage::test_utils::FlakyStore;
use storage::{
    keys, AccountKind, ExperienceMode, KeyValueStore, KvConfig, KvStore, MemoryStore, ModeStore,
    SessionParams,
};
use tempfile::TempDir;

fn memory_store() -> Arc<ModeStore> {
    Arc::new(ModeStore::new(Arc::new(MemoryStore::new())))
}

/// Individual -> Thread -> three interests -> six themed destinations
#[tokio::test]
async fn test_individual_thread_onboarding_mounts_themed_navigator() {
    rove::init_logging();
    let store = memory_store();

    let mut flow = match launch(store.clone()).await {
        Launch::Onboarding(flow) => flow,
        Launch::Main(_) => panic!("fresh store should start onboarding"),
    };

    flow.choose_account_kind(AccountKind::Individual).unwrap();
    flow.select_symbol(Symbol::Net).unwrap();
    flow.confirm_experience().await.unwrap();
    for id in ["wellness", "fitness", "books"] {
        flow.toggle_interest(id).unwrap();
    }

    let (session, nav) = complete_onboarding(&mut flow).await.unwrap();
    assert_eq!(session, SessionParams::new(ExperienceMode::Thread, AccountKind::Individual));
    assert_eq!(flow.state(), FlowState::Complete);

    assert_eq!(nav.screens().len(), 6);
    assert_eq!(nav.theme().colors.primary, "#EEBECE");
    assert_eq!(nav.theme().colors.background, "#FCF8F9");

    let first = &nav.screens()[0].props;
    for screen in nav.screens() {
        assert_eq!(screen.props.session(), first.session());
        assert!(Arc::ptr_eq(&screen.props.theme, &first.theme));
    }
}

#[tokio::test]
async fn test_completed_session_is_restored_on_next_launch() {
    let store = memory_store();
    let mut flow = SelectionFlow::new(store.clone());
    flow.choose_account_kind(AccountKind::Individual).unwrap();
    flow.select_symbol(Symbol::Axe).unwrap();
    flow.confirm_experience().await.unwrap();
    for id in ["nature", "travel", "photography"] {
        flow.toggle_interest(id).unwrap();
    }
    flow.complete().await.unwrap();

    match launch(store).await {
        Launch::Main(nav) => {
            assert_eq!(nav.session().mode, ExperienceMode::Green);
            assert_eq!(nav.focused(), Destination::Feed);
        }
        Launch::Onboarding(_) => panic!("completed session should skip onboarding"),
    }
}

#[tokio::test]
async fn test_completed_onboarding_without_mode_launches_green() {
    let kv = Arc::new(MemoryStore::new());
    let store = Arc::new(ModeStore::new(kv.clone()));
    store.set_account_kind(AccountKind::Individual).await.unwrap();
    store.mark_onboarding_complete().await.unwrap();

    match launch(store).await {
        Launch::Main(nav) => {
            assert_eq!(nav.session().mode, ExperienceMode::Green);
            assert_eq!(nav.theme().colors.primary, "#B7CBDF");
        }
        Launch::Onboarding(flow) => panic!("finished user sent back to onboarding at {}", flow.state()),
    }
    assert_eq!(kv.get(keys::EXPERIENCE_MODE).await.unwrap().as_deref(), Some("green"));
}

#[tokio::test]
async fn test_session_survives_reopening_sled_store() {
    let temp_dir = TempDir::new().unwrap();
    let config = KvConfig::new(temp_dir.path().join("rove.db").to_string_lossy().to_string())
        .flush_every_ms(None);

    {
        let kv = Arc::new(KvStore::open(&config).unwrap());
        let store = Arc::new(ModeStore::new(kv));
        let mut flow = SelectionFlow::resume_at_interests(store, AccountKind::Individual);
        for id in ["music", "gaming", "arts"] {
            flow.toggle_interest(id).unwrap();
        }
        // Mode was never chosen, so the default is persisted
        let session = flow.complete().await.unwrap();
        assert_eq!(session.mode, ExperienceMode::Green);
    }

    let kv = Arc::new(KvStore::open(&config).unwrap());
    let store = ModeStore::new(kv);
    assert_eq!(
        store.restore_session().await,
        Some(SessionParams::new(ExperienceMode::Green, AccountKind::Individual))
    );
    assert_eq!(store.interests().await.unwrap().map(|i| i.len()), Some(3));
}

#[tokio::test]
async fn test_entity_account_does_not_reach_main_app() {
    let store = memory_store();
    let mut flow = SelectionFlow::new(store.clone());
    flow.choose_account_kind(AccountKind::Entity).unwrap();

    assert_eq!(flow.state(), FlowState::VerificationPending);
    assert!(matches!(
        complete_onboarding(&mut flow).await,
        Err(OnboardingError::InvalidTransition { .. })
    ));
    assert!(matches!(launch(store).await, Launch::Onboarding(_)));
}

#[tokio::test]
async fn test_failed_completion_can_be_retried() {
    let kv = Arc::new(FlakyStore::new());
    let store = Arc::new(ModeStore::new(kv.clone()));
    let mut flow = SelectionFlow::resume_at_interests(store.clone(), AccountKind::Individual);
    for id in ["cooking", "health", "fitness"] {
        flow.toggle_interest(id).unwrap();
    }

    kv.fail_writes(true);
    assert!(matches!(
        complete_onboarding(&mut flow).await,
        Err(OnboardingError::Storage(_))
    ));
    assert_eq!(flow.state(), FlowState::ChoosingInterests);

    kv.fail_writes(false);
    let (session, _nav) = complete_onboarding(&mut flow).await.unwrap();
    assert_eq!(store.restore_session().await, Some(session));
    assert_eq!(
        kv.inner().get(keys::ONBOARDING_COMPLETE).await.unwrap().as_deref(),
        Some("true")
    );
}

#[test]
fn test_navigation_refuses_incomplete_params() {
    let missing_kind = RouteParams { experience_type: Some("thread".into()), account_type: None };
    assert!(matches!(
        MainNavigator::mount(&missing_kind),
        Err(NavigationError::MissingParameters { .. })
    ));

    let bad_mode = RouteParams::new("sepia", "individual");
    assert_eq!(
        MainNavigator::mount(&bad_mode).unwrap_err(),
        NavigationError::InvalidExperienceType("sepia".into())
    );
}
