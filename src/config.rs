//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (필수)
//! - `DATABASE_MAX_CONNECTIONS`: 연결 풀의 최대 연결 수
//! - `CORS_ORIGIN`: 브라우저 요청을 허용할 단일 출처(origin)
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호

// std::env: Rust 표준 라이브러리의 환경변수 모듈
use std::env;

// #[derive(...)]: 컴파일러가 트레이트 구현을 자동으로 생성합니다.
// - Debug: {:?} 포맷으로 출력 가능
// - Clone: .clone()으로 값을 복제 가능

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 main에서만 사용합니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 URL (예: "sqlite:data/tutorials.db")
    pub database_url: String,
    /// 연결 풀이 동시에 유지할 최대 연결 수 (기본값: 5)
    pub max_connections: u32,
    /// CORS로 허용할 출처 (기본값: "http://localhost:4200")
    pub cors_origin: String,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 8080)
    /// u16: 0~65535 범위의 부호 없는 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `DATABASE_URL`은 필수이며, 없으면 `VarError`를 반환합니다.
    /// 나머지 설정은 기본값이 있고, 숫자 파싱에 실패하면 기본값을 사용합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        // Self는 impl 블록의 대상 타입(Config)을 가리킵니다.
        Ok(Self {
            // `?`: 환경변수가 없으면 VarError를 즉시 반환합니다
            database_url: env::var("DATABASE_URL")?, // 필수: 없으면 에러

            // .ok(): Result → Option 변환
            // .and_then(): 값이 있을 때만 파싱을 시도하고, 실패하면 None
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),

            // unwrap_or_else(|_| ...): 환경변수가 없을 때 기본값을 만드는 클로저
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:4200".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            // 포트는 문자열 → 숫자 변환이 필요합니다. 파싱 실패 시 기본값 8080
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }

    /// `host:port` 형태의 바인딩 주소
    ///
    /// format!: 문자열 포맷팅 매크로. 새 String을 만들어 반환합니다.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
