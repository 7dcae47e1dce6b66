//! Domain layer
//! 명령 줄과 루프 상태를 외부 의존성 없이 표현한다.

pub mod command;
