//! Conversion logic between DTOs and domain entities.

use lounge_shared::time::timestamp_to_jst_clock_time;

use crate::domain::{
    ChatMessage, MessageDraft, MessageKind, MessageText, Participant, ParticipantName, Recipient,
    ValidationError,
};
use crate::infrastructure::dto::http as dto;

// ========================================
// DTO → Domain
// ========================================

impl TryFrom<dto::RegisterParticipantRequest> for ParticipantName {
    type Error = ValidationError;

    fn try_from(dto: dto::RegisterParticipantRequest) -> Result<Self, Self::Error> {
        ParticipantName::new(dto.name)
    }
}

impl TryFrom<dto::PostMessageRequest> for MessageDraft {
    type Error = ValidationError;

    fn try_from(dto: dto::PostMessageRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            to: Recipient::new(dto.to)?,
            text: MessageText::new(dto.text)?,
            kind: dto.r#type.parse::<MessageKind>()?,
        })
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<Participant> for dto::ParticipantDto {
    fn from(model: Participant) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name.into_string(),
            last_activity: model.last_activity.value(),
        }
    }
}

impl From<ChatMessage> for dto::MessageDto {
    fn from(model: ChatMessage) -> Self {
        Self {
            id: model.id.to_string(),
            from: model.from.into_string(),
            to: model.to.as_str().to_string(),
            text: model.text.as_str().to_string(),
            r#type: model.kind.as_str().to_string(),
            time: timestamp_to_jst_clock_time(model.created_at.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timestamp;

    fn post_request(to: &str, text: &str, kind: &str) -> dto::PostMessageRequest {
        dto::PostMessageRequest {
            to: to.to_string(),
            text: text.to_string(),
            r#type: kind.to_string(),
        }
    }

    #[test]
    fn test_post_message_request_to_draft() {
        // テスト項目: 正しいリクエストがドメインの MessageDraft に変換される
        // given (前提条件):
        let request = post_request("bob", "psst", "private");

        // when (操作):
        let draft = MessageDraft::try_from(request).unwrap();

        // then (期待する結果):
        assert_eq!(
            draft.to,
            Recipient::Participant(ParticipantName::new("bob".to_string()).unwrap())
        );
        assert_eq!(draft.text.as_str(), "psst");
        assert_eq!(draft.kind, MessageKind::Private);
    }

    #[test]
    fn test_post_message_request_validation_errors() {
        // テスト項目: 不正なリクエストはそれぞれの ValidationError になる
        // given (前提条件):
        let cases = [
            (post_request("", "hi", "public"), ValidationError::EmptyRecipient),
            (post_request("Todos", "", "public"), ValidationError::EmptyMessageText),
            (
                post_request("Todos", "hi", "shout"),
                ValidationError::UnknownMessageKind("shout".to_string()),
            ),
        ];

        for (request, expected) in cases {
            // when (操作):
            let result = MessageDraft::try_from(request);

            // then (期待する結果):
            assert_eq!(result, Err(expected));
        }
    }

    #[test]
    fn test_register_request_is_trimmed() {
        // テスト項目: 参加者登録リクエストの name は trim される
        // given (前提条件):
        let request = dto::RegisterParticipantRequest {
            name: " alice ".to_string(),
        };

        // when (操作):
        let name = ParticipantName::try_from(request).unwrap();

        // then (期待する結果):
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_domain_message_to_dto() {
        // テスト項目: ドメインの ChatMessage が DTO に変換され、時刻が HH:MM:SS になる
        // given (前提条件):
        // 2023-01-01 09:30:15 JST
        let created_at = Timestamp::new(1672498800000 + (9 * 3600 + 30 * 60 + 15) * 1000);
        let message = ChatMessage::left(ParticipantName::new("alice".to_string()).unwrap(), created_at);
        let id = message.id.to_string();

        // when (操作):
        let dto: dto::MessageDto = message.into();

        // then (期待する結果):
        assert_eq!(dto.id, id);
        assert_eq!(dto.from, "alice");
        assert_eq!(dto.to, "Todos");
        assert_eq!(dto.text, "sai da sala...");
        assert_eq!(dto.r#type, "status");
        assert_eq!(dto.time, "09:30:15");
    }

    #[test]
    fn test_domain_participant_to_dto() {
        // テスト項目: ドメインの Participant が DTO に変換される
        // given (前提条件):
        let participant = Participant::new(
            ParticipantName::new("bob".to_string()).unwrap(),
            Timestamp::new(2000),
        );

        // when (操作):
        let dto: dto::ParticipantDto = participant.clone().into();

        // then (期待する結果):
        assert_eq!(dto.id, participant.id.to_string());
        assert_eq!(dto.name, "bob");
        assert_eq!(dto.last_activity, 2000);
    }
}
