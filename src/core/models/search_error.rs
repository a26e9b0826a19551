use thiserror::Error;

/// Everything that can go wrong between submitting a search and getting a
/// parsed response. All variants surface to the user as a single-line message;
/// none is fatal to the process and none is retried.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("API 요청 실패 - Status Code: {status}")]
    Http { status: u16, body: String },

    #[error("요청 중 오류 발생: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON 파싱 오류: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("API 인증 정보가 없습니다 (설정 파일 또는 환경변수를 확인하세요)")]
    MissingCredentials,
}
