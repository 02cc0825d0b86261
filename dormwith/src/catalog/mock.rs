//! Built-in DormWith fixture data.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::traits::{ChatCatalog, ContentCatalog, MatchingCatalog, ProfileCatalog};
use super::Catalog;
use crate::error::{DormError, Result};
use crate::models::{
    ChatListItem, ChatMember, ChatRoom, Faq, Gender, MatchOutcome, MatchRecord, MatchUser,
    Message, MessageKind, NewMatchUser, NotificationSettings, Policy, Post, PostKind, Sender,
    UserProfile,
};

/// In-memory catalog seeded with the DormWith sample tables.
///
/// Chat timestamps are relative to the moment the catalog is built.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    recommended: Vec<MatchUser>,
    waiting: Vec<MatchUser>,
    received: Vec<MatchUser>,
    current_user: UserProfile,
    posts: HashMap<PostKind, Vec<Post>>,
    history: Vec<MatchRecord>,
    interests: Vec<MatchRecord>,
    faqs: Vec<Faq>,
    policies: Vec<Policy>,
    rooms: Vec<ChatRoom>,
    chat_list: Vec<ChatListItem>,
    messages: HashMap<String, Vec<Message>>,
}

impl MockCatalog {
    pub fn new() -> Result<Self> {
        Self::built_at(Utc::now())
    }

    /// Build the fixtures with `now` as the reference time for chat messages.
    pub fn built_at(now: DateTime<Utc>) -> Result<Self> {
        let messages = seed_messages(now);
        let catalog = Self {
            recommended: seed_recommended()?,
            waiting: seed_waiting()?,
            received: seed_received()?,
            current_user: seed_current_user()?,
            posts: seed_posts()?,
            history: seed_history()?,
            interests: seed_interests()?,
            faqs: seed_faqs(),
            policies: seed_policies()?,
            rooms: seed_rooms(now, &messages),
            chat_list: seed_chat_list(),
            messages,
        };

        tracing::debug!(
            recommended = catalog.recommended.len(),
            waiting = catalog.waiting.len(),
            received = catalog.received.len(),
            rooms = catalog.rooms.len(),
            "Mock catalog built"
        );

        Ok(catalog)
    }
}

impl MatchingCatalog for MockCatalog {
    fn recommended_users(&self) -> Result<Vec<MatchUser>> {
        Ok(self.recommended.clone())
    }

    fn waiting_matches(&self) -> Result<Vec<MatchUser>> {
        Ok(self.waiting.clone())
    }

    fn received_requests(&self) -> Result<Vec<MatchUser>> {
        Ok(self.received.clone())
    }
}

impl ProfileCatalog for MockCatalog {
    fn current_user(&self) -> Result<UserProfile> {
        Ok(self.current_user.clone())
    }

    fn default_notification_settings(&self) -> Result<NotificationSettings> {
        Ok(NotificationSettings::default())
    }

    fn posts(&self, kind: PostKind) -> Result<Vec<Post>> {
        Ok(self.posts.get(&kind).cloned().unwrap_or_default())
    }

    fn matching_history(&self) -> Result<Vec<MatchRecord>> {
        Ok(self.history.clone())
    }

    fn interested_matches(&self) -> Result<Vec<MatchRecord>> {
        Ok(self.interests.clone())
    }
}

impl ChatCatalog for MockCatalog {
    fn chat_rooms(&self) -> Result<Vec<ChatRoom>> {
        Ok(self.rooms.clone())
    }

    fn chat_list(&self) -> Result<Vec<ChatListItem>> {
        Ok(self.chat_list.clone())
    }

    fn room_messages(&self, room_id: &str) -> Result<Vec<Message>> {
        Ok(self.messages.get(room_id).cloned().unwrap_or_default())
    }
}

impl ContentCatalog for MockCatalog {
    fn faqs(&self) -> Result<Vec<Faq>> {
        Ok(self.faqs.clone())
    }

    fn policies(&self) -> Result<Vec<Policy>> {
        Ok(self.policies.clone())
    }
}

impl Catalog for MockCatalog {
    fn name(&self) -> &str {
        "mock"
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| DormError::Internal(format!("invalid fixture date {y}-{m}-{d}")))
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: &str,
    name: &str,
    age: u8,
    gender: Gender,
    grade: u8,
    bio: &str,
    tag_list: &[&str],
    compatibility: i64,
    created_at: NaiveDate,
) -> Result<MatchUser> {
    MatchUser::try_from(NewMatchUser {
        id: id.to_string(),
        name: name.to_string(),
        age,
        gender,
        grade,
        profile_image: None,
        bio: bio.to_string(),
        tags: tags(tag_list),
        compatibility,
        created_at,
    })
}

// ── Matching ─────────────────────────────────────────────────────────────

fn seed_recommended() -> Result<Vec<MatchUser>> {
    Ok(vec![
        candidate(
            "rec-1",
            "김서연",
            21,
            Gender::Female,
            2,
            "아침 수업이 많아서 일찍 자고 일찍 일어나요. 정리정돈을 좋아합니다.",
            &["아침형", "깔끔함", "비흡연"],
            92,
            date(2024, 11, 10)?,
        )?,
        candidate(
            "rec-2",
            "박준혁",
            23,
            Gender::Male,
            3,
            "도서관에서 공부하고 저녁에는 운동을 합니다. 조용한 방을 선호해요.",
            &["조용함", "도서관", "운동 즐김"],
            85,
            date(2024, 11, 8)?,
        )?,
        candidate(
            "rec-3",
            "이하은",
            20,
            Gender::Female,
            1,
            "새내기입니다! 카페에서 과제하는 걸 좋아하고 밤에 집중이 잘 돼요.",
            &["밤형", "카페", "활발함"],
            78,
            date(2024, 11, 6)?,
        )?,
        candidate(
            "rec-4",
            "정민수",
            22,
            Gender::Male,
            2,
            "주말에는 주로 방에서 쉬는 편이에요. 서로 배려하며 지내고 싶습니다.",
            &["집콕", "배려심", "비흡연"],
            71,
            date(2024, 11, 3)?,
        )?,
    ])
}

fn seed_waiting() -> Result<Vec<MatchUser>> {
    Ok(vec![
        candidate(
            "wait-1",
            "최유진",
            22,
            Gender::Female,
            3,
            "간호학과 3학년이에요. 실습 때문에 기상 시간이 이른 편입니다.",
            &["아침형", "조용함", "깔끔함"],
            88,
            date(2024, 11, 2)?,
        )?,
        candidate(
            "wait-2",
            "한도윤",
            24,
            Gender::Male,
            4,
            "졸업반이라 대부분 도서관에 있어요. 방은 잠만 자는 곳입니다.",
            &["도서관", "성실함"],
            80,
            date(2024, 10, 30)?,
        )?,
    ])
}

fn seed_received() -> Result<Vec<MatchUser>> {
    Ok(vec![
        candidate(
            "recv-1",
            "윤지아",
            21,
            Gender::Female,
            2,
            "디자인학과라 밤샘 작업이 종종 있지만 조용히 할게요.",
            &["밤형", "배려형", "비흡연"],
            90,
            date(2024, 11, 11)?,
        )?,
        candidate(
            "recv-2",
            "강태민",
            20,
            Gender::Male,
            1,
            "체육학과 1학년입니다. 아침 운동을 같이 할 룸메이트 환영해요.",
            &["운동 즐김", "아침형", "활발함"],
            76,
            date(2024, 11, 9)?,
        )?,
        candidate(
            "recv-3",
            "오세린",
            23,
            Gender::Female,
            3,
            "전자공학부 3학년이에요. 주기적으로 청소하고 소음에 민감한 편입니다.",
            &["주기적 정리", "조용한 편"],
            69,
            date(2024, 11, 5)?,
        )?,
    ])
}

// ── Profile ──────────────────────────────────────────────────────────────

fn seed_current_user() -> Result<UserProfile> {
    Ok(UserProfile {
        id: "user-001".to_string(),
        name: "홍길동".to_string(),
        gender: Gender::Male,
        age: 22,
        grade: 2,
        bio: "기숙사 룸메이트를 찾고 있습니다. 깔끔함과 배려를 중요하게 생각합니다.".to_string(),
        profile_image: None,
        tags: tags(&["깔끔함", "조용함", "아침형"]),
        created_at: date(2024, 1, 1)?,
    })
}

fn post(
    id: &str,
    title: &str,
    content: &str,
    category: &str,
    counts: (u32, u32, u32),
    created_at: NaiveDate,
    author_id: &str,
) -> Post {
    let (likes, comments, bookmarks) = counts;
    Post {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        category: category.to_string(),
        likes,
        comments,
        bookmarks,
        created_at,
        author_id: author_id.to_string(),
    }
}

fn seed_posts() -> Result<HashMap<PostKind, Vec<Post>>> {
    let mine = vec![
        post(
            "post-1",
            "기숙사 생활 팁 공유합니다!",
            "기숙사 생활을 하면서 배운 유용한 팁들을 공유하고 싶습니다...",
            "생활 팁",
            (24, 8, 12),
            date(2024, 11, 10)?,
            "user-001",
        ),
        post(
            "post-2",
            "룸메이트와의 첫 만남 어떻게 준비해야 하나요?",
            "다음 주에 룸메이트와 처음 만나는데 어떻게 준비해야 좋을까요?...",
            "질문",
            (15, 12, 5),
            date(2024, 11, 8)?,
            "user-001",
        ),
        post(
            "post-3",
            "방음 문제 해결 방법",
            "기숙사에서 소음이 많았는데 이런 방법으로 해결했습니다...",
            "팁",
            (32, 6, 18),
            date(2024, 11, 5)?,
            "user-001",
        ),
    ];

    let commented = vec![
        post(
            "post-4",
            "기숙사 후배들을 위한 꿀팁 모음",
            "선배로서 후배들에게 도움이 될 만한 팁들을 모아봤습니다...",
            "정보",
            (45, 20, 30),
            date(2024, 11, 12)?,
            "user-002",
        ),
        post(
            "post-5",
            "룸메이트 간 갈등 해결하기",
            "룸메이트와 마찰이 생겼을 때 어떻게 대처해야 할까요?...",
            "상담",
            (28, 15, 12),
            date(2024, 11, 9)?,
            "user-003",
        ),
    ];

    let liked = vec![
        post(
            "post-6",
            "기숙사에서 공부 잘하는 방법",
            "조용한 환경을 유지하면서 효율적으로 공부하는 방법...",
            "공부법",
            (56, 18, 34),
            date(2024, 11, 11)?,
            "user-004",
        ),
        post(
            "post-7",
            "기숙사 비용 절감 노하우",
            "기숙사 생활 중 돈을 절약할 수 있는 다양한 방법들...",
            "정보",
            (42, 14, 28),
            date(2024, 11, 7)?,
            "user-005",
        ),
        post(
            "post-8",
            "룸메이트와 좋은 관계 유지하는 법",
            "서로 다른 성격의 룸메이트와 잘 지내는 방법...",
            "관계",
            (38, 11, 22),
            date(2024, 11, 6)?,
            "user-006",
        ),
    ];

    let mut bookmarked = liked.clone();
    bookmarked.push(post(
        "post-9",
        "기숙사 신입생 필수 준비물",
        "기숙사에 처음 가는 신입생들이 꼭 챙겨야 할 물건들...",
        "준비",
        (67, 25, 48),
        date(2024, 11, 4)?,
        "user-007",
    ));

    Ok(HashMap::from([
        (PostKind::Mine, mine),
        (PostKind::Commented, commented),
        (PostKind::Liked, liked),
        (PostKind::Bookmarked, bookmarked),
    ]))
}

fn record(
    id: &str,
    target_user_id: &str,
    target_name: &str,
    status: MatchOutcome,
    created_at: NaiveDate,
) -> MatchRecord {
    MatchRecord {
        id: id.to_string(),
        target_user_id: target_user_id.to_string(),
        target_name: target_name.to_string(),
        status,
        created_at,
    }
}

fn seed_history() -> Result<Vec<MatchRecord>> {
    Ok(vec![
        record("match-1", "user-100", "김민지", MatchOutcome::Matched, date(2024, 11, 1)?),
        record("match-2", "user-101", "이준호", MatchOutcome::Waiting, date(2024, 10, 28)?),
        record("match-3", "user-102", "박지연", MatchOutcome::Rejected, date(2024, 10, 25)?),
    ])
}

fn seed_interests() -> Result<Vec<MatchRecord>> {
    Ok(vec![
        record("int-1", "user-200", "최현준", MatchOutcome::Waiting, date(2024, 11, 12)?),
        record("int-2", "user-201", "이서윤", MatchOutcome::Waiting, date(2024, 11, 10)?),
        record("int-3", "user-202", "정우성", MatchOutcome::Waiting, date(2024, 11, 8)?),
    ])
}

// ── Content ──────────────────────────────────────────────────────────────

fn faq(id: &str, category: &str, question: &str, answer: &str) -> Faq {
    Faq {
        id: id.to_string(),
        category: category.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

fn seed_faqs() -> Vec<Faq> {
    vec![
        faq(
            "faq-1",
            "매칭",
            "매칭은 어떻게 이루어지나요?",
            "생활 패턴 분석을 통해 가장 잘 맞는 룸메이트를 추천해드립니다. 추천된 사용자에게 관심을 표시하면 대기 중으로 이동됩니다.",
        ),
        faq(
            "faq-2",
            "매칭",
            "거절한 사용자는 다시 볼 수 있나요?",
            "거절한 사용자는 향후 추천에서 제외됩니다. 변경을 원하시면 고객센터에 문의해주세요.",
        ),
        faq(
            "faq-3",
            "게시판",
            "게시글을 삭제하려면 어떻게 하나요?",
            "게시글 상세 페이지의 메뉴에서 삭제를 선택할 수 있습니다.",
        ),
        faq(
            "faq-4",
            "계정",
            "회원 탈퇴는 어떻게 하나요?",
            "개인정보 설정 페이지의 맨 아래에서 계정 탈퇴를 선택할 수 있습니다.",
        ),
        faq(
            "faq-5",
            "기타",
            "문제를 보고하려면?",
            "고객센터 페이지의 문의 양식을 통해 신고할 수 있습니다.",
        ),
    ]
}

const TERMS_TEXT: &str = "DormWith 서비스 이용약관

제1장 총칙
제1조 (목적)
본 약관은 DormWith(이하 \"회사\")가 제공하는 인터넷 기반 룸메이트 매칭 서비스(이하 \"서비스\")를 이용함에 있어 회사와 이용자의 권리, 의무 및 책임사항을 규정함을 목적으로 합니다.

제2조 (약관의 효력과 변경)
본 약관은 서비스 이용자(이하 \"이용자\")가 본 약관에 동의함으로써 효력이 발생합니다.
회사는 필요에 따라 약관을 개정할 수 있으며, 개정된 약관은 서비스 내 공지함으로써 효력을 발생합니다.

제3조 (서비스의 이용)
이용자는 본 약관에 따라 회사가 제공하는 서비스를 이용할 수 있습니다.
서비스 이용에 필요한 회원가입 및 개인정보 제공은 이용자의 책임입니다.";

const PRIVACY_TEXT: &str = "개인정보 처리방침

1. 개인정보의 수집 및 이용
회사는 이용자의 개인정보를 다음의 목적을 위해 수집 및 이용합니다.
- 회원 가입 및 서비스 제공
- 매칭 알고리즘 운영
- 고객 상담 및 문제 해결
- 서비스 개선 및 통계

2. 개인정보의 보관 기간
수집된 개인정보는 서비스 이용 기간 동안 보관하며, 이용 종료 후 안전하게 삭제합니다.
다만, 관계 법령에 따라 보관이 필요한 경우는 해당 기간 동안 보관합니다.

3. 개인정보의 보호
회사는 이용자의 개인정보를 보호하기 위해 적절한 기술적, 관리적 대책을 마련합니다.";

const SERVICE_RULES_TEXT: &str = "서비스 이용 규칙

1. 금지 행위
이용자는 서비스 이용 시 다음의 행위를 금지합니다.
- 다른 이용자를 명예훼손, 모욕하는 행위
- 부정한 목적으로 서비스를 이용하는 행위
- 서비스의 안정성을 해치는 행위
- 타인의 정보를 무단으로 수집하거나 유포하는 행위

2. 제재
위반 사항이 확인될 경우, 회사는 이용자 계정을 제한하거나 탈퇴시킬 수 있습니다.

3. 매칭 서비스
- 매칭은 생활 패턴 분석을 기반으로 자동으로 제공됩니다.
- 매칭 결과에 대한 책임은 이용자에게 있습니다.";

fn seed_policies() -> Result<Vec<Policy>> {
    let updated = date(2024, 1, 1)?;
    Ok([
        ("terms", "이용약관", TERMS_TEXT),
        ("privacy", "개인정보 처리방침", PRIVACY_TEXT),
        ("service", "서비스 이용 규칙", SERVICE_RULES_TEXT),
    ]
    .into_iter()
    .map(|(id, title, content)| Policy {
        id: id.to_string(),
        title: title.to_string(),
        last_updated: updated,
        content: content.to_string(),
    })
    .collect())
}

// ── Chat ─────────────────────────────────────────────────────────────────

fn sender(id: &str, name: &str) -> Sender {
    Sender {
        id: id.to_string(),
        name: name.to_string(),
        avatar: None,
    }
}

fn member(id: &str, name: &str, is_online: bool) -> ChatMember {
    ChatMember {
        id: id.to_string(),
        name: name.to_string(),
        avatar: None,
        is_online,
    }
}

fn transcript(now: DateTime<Utc>, lines: &[(&str, &str, &str, i64)]) -> Vec<Message> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, (sender_id, sender_name, content, minutes_ago))| Message {
            id: (idx + 1).to_string(),
            sender: sender(sender_id, sender_name),
            content: content.to_string(),
            timestamp: now - Duration::minutes(*minutes_ago),
            is_read: true,
            kind: MessageKind::Text,
        })
        .collect()
}

fn seed_messages(now: DateTime<Utc>) -> HashMap<String, Vec<Message>> {
    let group = transcript(
        now,
        &[
            ("1", "철수", "안녕! 내일 뭐해?", 60),
            ("3", "나", "특별한 계획은 없어", 50),
            ("1", "철수", "그럼 같이 영화 보자!", 40),
            ("2", "영희", "좋아! 언제?", 30),
            ("3", "나", "나도 가고 싶은데 내일은 바빠", 20),
            ("1", "철수", "아 그럼 모레는?", 10),
            ("3", "나", "그건 괜찮을 것 같아", 5),
        ],
    );
    let direct = transcript(
        now,
        &[
            ("2", "영희", "안녕하세요! 룸메이트 매칭 관련해서 연락드렸습니다.", 120),
            ("3", "나", "네, 안녕하세요!", 110),
            ("2", "영희", "혹시 대학가 기숙사 관심 있으신가요?", 100),
            ("3", "나", "네 알겠습니다! 그럼 내일 봬요~", 90),
        ],
    );

    HashMap::from([("1".to_string(), group), ("2".to_string(), direct)])
}

fn seed_rooms(now: DateTime<Utc>, messages: &HashMap<String, Vec<Message>>) -> Vec<ChatRoom> {
    let last = |room_id: &str| messages.get(room_id).and_then(|m| m.last().cloned());

    vec![
        ChatRoom {
            id: "1".to_string(),
            name: "룸메이트 그룹".to_string(),
            avatar: None,
            is_group: true,
            members: vec![
                member("1", "철수", true),
                member("2", "영희", false),
                member("3", "나", true),
            ],
            last_message: last("1"),
            unread_count: 0,
            created_at: now,
            updated_at: now,
        },
        ChatRoom {
            id: "2".to_string(),
            name: "룸메이트 2".to_string(),
            avatar: None,
            is_group: false,
            members: vec![member("2", "영희", true), member("3", "나", true)],
            last_message: last("2"),
            unread_count: 0,
            created_at: now,
            updated_at: now,
        },
    ]
}

fn seed_chat_list() -> Vec<ChatListItem> {
    const GREETING: &str = "안녕하세요! 룸메이트 매칭 관련해서 연락드렸습니다.";
    const SEE_YOU: &str = "네 알겠습니다! 그럼 내일 봬요~";

    [
        ("1", "룸메이트 그룹", SEE_YOU, "1분 전", 1, true),
        ("2", "룸메이트 2", GREETING, "2분 전", 2, false),
        ("3", "룸메이트 그룹", SEE_YOU, "3분 전", 3, true),
        ("4", "룸메이트 4", GREETING, "4시간 전", 0, false),
        ("5", "룸메이트 5", SEE_YOU, "5시간 전", 0, false),
        ("6", "룸메이트 6", GREETING, "6시간 전", 0, false),
        ("7", "룸메이트 7", SEE_YOU, "7시간 전", 0, false),
        ("8", "룸메이트 8", GREETING, "8시간 전", 0, false),
    ]
    .into_iter()
    .map(|(id, name, last, time, unread, is_group)| ChatListItem {
        id: id.to_string(),
        name: name.to_string(),
        avatar: None,
        last_message: Some(last.to_string()),
        last_message_time: Some(time.to_string()),
        unread_count: unread,
        is_group,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn catalog() -> MockCatalog {
        MockCatalog::new().expect("fixtures are valid")
    }

    #[test]
    fn matching_seed_ids_are_disjoint() {
        let c = catalog();
        let mut seen = HashSet::new();
        for user in c
            .recommended_users()
            .unwrap()
            .into_iter()
            .chain(c.waiting_matches().unwrap())
            .chain(c.received_requests().unwrap())
        {
            assert!(seen.insert(user.id.clone()), "duplicate id {}", user.id);
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn current_user_matches_default_viewer() {
        let user = catalog().current_user().unwrap();
        assert_eq!(user.id, "user-001");
        assert_eq!(user.name, "홍길동");
        assert_eq!(user.tags, vec!["깔끔함", "조용함", "아침형"]);
    }

    #[test]
    fn bookmarked_posts_extend_liked_posts() {
        let c = catalog();
        let liked = c.posts(PostKind::Liked).unwrap();
        let bookmarked = c.posts(PostKind::Bookmarked).unwrap();
        assert_eq!(bookmarked.len(), liked.len() + 1);
        assert_eq!(&bookmarked[..liked.len()], &liked[..]);
        assert_eq!(bookmarked.last().unwrap().id, "post-9");
    }

    #[test]
    fn chat_transcripts_are_oldest_first() {
        let now = Utc::now();
        let c = MockCatalog::built_at(now).unwrap();
        let group = c.room_messages("1").unwrap();
        assert_eq!(group.len(), 7);
        assert!(group.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert_eq!(group[0].timestamp, now - Duration::minutes(60));
        assert_eq!(c.room_messages("2").unwrap().len(), 4);
        assert!(c.room_messages("9").unwrap().is_empty());
    }

    #[test]
    fn rooms_carry_their_last_message() {
        let c = catalog();
        let rooms = c.chat_rooms().unwrap();
        let group = rooms.iter().find(|r| r.id == "1").unwrap();
        assert_eq!(
            group.last_message.as_ref().map(|m| m.content.as_str()),
            Some("그건 괜찮을 것 같아")
        );
        assert_eq!(group.online_count(), 2);
    }

    #[test]
    fn chat_list_has_eight_rows() {
        let list = catalog().chat_list().unwrap();
        assert_eq!(list.len(), 8);
        assert_eq!(list.iter().map(|i| i.unread_count).sum::<u32>(), 6);
    }

    #[test]
    fn content_tables_are_populated() {
        let c = catalog();
        assert_eq!(c.faqs().unwrap().len(), 5);
        let ids: Vec<String> = c.policies().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["terms", "privacy", "service"]);
    }
}
