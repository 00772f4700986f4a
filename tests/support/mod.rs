#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use routes2cedar::binding::authorizer::RequestAuthorizer;
use routes2cedar::binding::collaborators::{
    IdentitySourceRequest, IdentitySourceService, PolicyStoreRequest, PolicyStoreService,
    RouteEnforcement,
};
use routes2cedar::binding::error::BuildError;
use routes2cedar::inventory::document::InventoryDocument;

/// Shared journal recording collaborator calls in invocation order.
pub(crate) type CallJournal = Rc<RefCell<Vec<&'static str>>>;

pub(crate) fn new_journal() -> CallJournal {
    Rc::new(RefCell::new(Vec::new()))
}

pub(crate) fn journal_entries(journal: &CallJournal) -> Vec<&'static str> {
    journal.borrow().clone()
}

// ── Policy store fake ────────────────────────────────────────────────────────

pub(crate) struct RecordingPolicyStores {
    journal: CallJournal,
    pub(crate) requests: Vec<PolicyStoreRequest>,
    reject_with: Option<BuildError>,
}

impl RecordingPolicyStores {
    pub(crate) fn new(journal: &CallJournal) -> Self {
        RecordingPolicyStores {
            journal: Rc::clone(journal),
            requests: Vec::new(),
            reject_with: None,
        }
    }

    pub(crate) fn rejecting(journal: &CallJournal, error: BuildError) -> Self {
        RecordingPolicyStores {
            journal: Rc::clone(journal),
            requests: Vec::new(),
            reject_with: Some(error),
        }
    }
}

impl PolicyStoreService for RecordingPolicyStores {
    fn create_policy_store(&mut self, request: &PolicyStoreRequest) -> Result<String, BuildError> {
        if let Some(error) = &self.reject_with {
            return Err(error.clone());
        }
        self.journal.borrow_mut().push("create_policy_store");
        self.requests.push(request.clone());
        Ok(format!("ps-{}", self.requests.len()))
    }
}

// ── Identity source fake ─────────────────────────────────────────────────────

pub(crate) struct RecordingIdentitySources {
    journal: CallJournal,
    pub(crate) requests: Vec<IdentitySourceRequest>,
}

impl RecordingIdentitySources {
    pub(crate) fn new(journal: &CallJournal) -> Self {
        RecordingIdentitySources {
            journal: Rc::clone(journal),
            requests: Vec::new(),
        }
    }
}

impl IdentitySourceService for RecordingIdentitySources {
    fn create_identity_source(
        &mut self,
        request: &IdentitySourceRequest,
    ) -> Result<String, BuildError> {
        self.journal.borrow_mut().push("create_identity_source");
        self.requests.push(request.clone());
        Ok(format!("is-{}", self.requests.len()))
    }
}

// ── Enforcement fake ─────────────────────────────────────────────────────────

pub(crate) struct RecordingEnforcement {
    journal: CallJournal,
    pub(crate) attachments: Vec<(String, RequestAuthorizer)>,
}

impl RecordingEnforcement {
    pub(crate) fn new(journal: &CallJournal) -> Self {
        RecordingEnforcement {
            journal: Rc::clone(journal),
            attachments: Vec::new(),
        }
    }
}

impl RouteEnforcement for RecordingEnforcement {
    fn attach_authorizer(
        &mut self,
        api_name: &str,
        authorizer: &RequestAuthorizer,
    ) -> Result<(), BuildError> {
        self.journal.borrow_mut().push("attach_authorizer");
        self.attachments
            .push((api_name.to_string(), authorizer.clone()));
        Ok(())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub(crate) fn load_fixture_inventory(fixture: &str) -> InventoryDocument {
    let path = std::path::PathBuf::from("tests/fixtures")
        .join(fixture)
        .join("inventory.json");
    let json = std::fs::read_to_string(path).expect("fixture inventory should be readable");
    InventoryDocument::from_json(&json).expect("fixture inventory should parse")
}
