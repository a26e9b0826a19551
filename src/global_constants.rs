pub const APPLICATION_TITLE: &str = "뉴스 검색";

pub const NEWS_SEARCH_API_URL: &str = "https://openapi.naver.com/v1/search/news.json";

pub const CLIENT_ID_HEADER: &str = "X-Naver-Client-Id";
pub const CLIENT_SECRET_HEADER: &str = "X-Naver-Client-Secret";

pub const CLIENT_ID_ENV_VAR: &str = "NAVER_CLIENT_ID";
pub const CLIENT_SECRET_ENV_VAR: &str = "NAVER_CLIENT_SECRET";

pub const DEFAULT_SEARCH_KEYWORD: &str = "포스코";

// The API counts result offsets from 1, not 0.
pub const FIRST_PAGE_START: u32 = 1;

pub const SETTINGS_DIR_NAME: &str = "naver-news-search";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const WINDOW_WIDTH: f32 = 1180.0;
pub const WINDOW_HEIGHT: f32 = 820.0;
