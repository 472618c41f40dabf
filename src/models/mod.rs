//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `tutorial`: Tutorial 엔티티와 요청 본문 구조체
//!
//! `pub use tutorial::*;`로 재공개하여 `crate::models::Tutorial`처럼 짧게 접근합니다.

pub mod tutorial;

pub use tutorial::*;
