use axum::http::StatusCode;

use mnemonica::CutCardResponse;

use super::setup::TestResponse;

// ============================================================================
// Response Assertions
// ============================================================================

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn expect_cut(&self) -> CutAssertion {
        assert_eq!(
            self.status,
            StatusCode::OK,
            "unexpected body: {}",
            String::from_utf8_lossy(&self.body)
        );
        CutAssertion {
            response: serde_json::from_slice(&self.body).unwrap(),
        }
    }

    pub fn expect_error(&self, status: StatusCode, message: &str) {
        assert_eq!(self.status, status);
        assert_eq!(self.json()["error"], message);
    }
}

pub struct CutAssertion {
    pub response: CutCardResponse,
}

impl CutAssertion {
    pub fn card(self, code: &str, stack_position: usize) -> Self {
        assert_eq!(self.response.card.to_string(), code);
        assert_eq!(self.response.card_stack_position.get(), stack_position);
        self
    }

    pub fn target(self, position: usize) -> Self {
        assert_eq!(self.response.target_position.get(), position);
        self
    }

    pub fn cut_at(self, code: &str, position: usize) -> Self {
        assert_eq!(self.response.cut.bottom_card.to_string(), code);
        assert_eq!(self.response.cut.card_position.get(), position);
        self
    }

    pub fn top(self, code: &str, position: usize) -> Self {
        assert_eq!(self.response.after_cut.top_card.to_string(), code);
        assert_eq!(self.response.after_cut.top_card_position.get(), position);
        self
    }
}
