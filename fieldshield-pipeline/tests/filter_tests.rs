use fieldshield_meta::{FieldDescriptor, SecureFields};
use fieldshield_pipeline::{FieldDecision, ResponseFilter, decide};
use fieldshield_types::{
    CallerContext, Channel, CryptoMode, FieldPolicy, MaskingType, RoleTier,
};
use pretty_assertions::assert_eq;

#[derive(Clone, Default)]
struct EmployeeCard {
    name: Option<String>,
    phone: Option<String>,
    salary_grade: Option<String>,
    badge_qr: Option<String>,
    dept_cd: Option<String>,
}

impl SecureFields for EmployeeCard {
    const TABLE: &'static str = "std_employee_card";
    const MODE: CryptoMode = CryptoMode::Partial;

    fn descriptors() -> &'static [FieldDescriptor<Self>] {
        const FIELDS: &[FieldDescriptor<EmployeeCard>] = &[
            FieldDescriptor::new("name", |r: &EmployeeCard| r.name.as_deref(), |r, v| r.name = v)
                .masked(MaskingType::Name),
            FieldDescriptor::new("phone", |r: &EmployeeCard| r.phone.as_deref(), |r, v| r.phone = v)
                .masked(MaskingType::Phone),
            FieldDescriptor::new("salary_grade", |r: &EmployeeCard| r.salary_grade.as_deref(), |r, v| {
                r.salary_grade = v
            })
            .policy(FieldPolicy::roles(&[RoleTier::InternalStaff])),
            FieldDescriptor::new("badge_qr", |r: &EmployeeCard| r.badge_qr.as_deref(), |r, v| {
                r.badge_qr = v
            })
            .policy(FieldPolicy::channels(&[Channel::Mobile])),
            FieldDescriptor::new("dept_cd", |r: &EmployeeCard| r.dept_cd.as_deref(), |r, v| r.dept_cd = v),
        ];
        FIELDS
    }
}

fn card() -> EmployeeCard {
    EmployeeCard {
        name: Some("홍길동".into()),
        phone: Some("010-1234-5678".into()),
        salary_grade: Some("G4".into()),
        badge_qr: Some("qr-payload".into()),
        dept_cd: Some("D100".into()),
    }
}

// --- decide ---

#[test]
fn untagged_field_is_emitted_to_everyone() {
    for tier in [
        RoleTier::InternalStaff,
        RoleTier::CustomerAdmin,
        RoleTier::CustomerEmployee,
    ] {
        let ctx = CallerContext::new(Some(Channel::Web), tier);
        assert_eq!(decide(&FieldPolicy::OPEN, None, &ctx), FieldDecision::Emit);
    }
}

#[test]
fn role_tagged_field_is_omitted_for_other_tiers() {
    let policy = FieldPolicy::roles(&[RoleTier::InternalStaff]);
    let internal = CallerContext::new(None, RoleTier::InternalStaff);
    let external = CallerContext::new(None, RoleTier::CustomerAdmin);

    assert_eq!(decide(&policy, None, &internal), FieldDecision::Emit);
    assert_eq!(decide(&policy, None, &external), FieldDecision::Omit);
}

#[test]
fn channel_tagged_field_is_omitted_for_the_other_channel() {
    let policy = FieldPolicy::channels(&[Channel::Web]);
    let web = CallerContext::internal(Some(Channel::Web));
    let mobile = CallerContext::internal(Some(Channel::Mobile));
    let channelless = CallerContext::internal(None);

    assert_eq!(decide(&policy, None, &web), FieldDecision::Emit);
    assert_eq!(decide(&policy, None, &mobile), FieldDecision::Omit);
    assert_eq!(decide(&policy, None, &channelless), FieldDecision::Emit);
}

#[test]
fn maskable_field_masks_for_external_tiers_only() {
    let ctx_internal = CallerContext::new(Some(Channel::Web), RoleTier::InternalStaff);
    let ctx_admin = CallerContext::new(Some(Channel::Web), RoleTier::CustomerAdmin);
    let ctx_employee = CallerContext::new(Some(Channel::Web), RoleTier::CustomerEmployee);

    let masking = Some(MaskingType::Name);
    assert_eq!(decide(&FieldPolicy::OPEN, masking, &ctx_internal), FieldDecision::Emit);
    assert_eq!(decide(&FieldPolicy::OPEN, masking, &ctx_admin), FieldDecision::Mask);
    assert_eq!(decide(&FieldPolicy::OPEN, masking, &ctx_employee), FieldDecision::Mask);
}

#[test]
fn omit_wins_over_mask() {
    let policy = FieldPolicy::roles(&[RoleTier::InternalStaff]);
    let ctx = CallerContext::new(Some(Channel::Web), RoleTier::CustomerEmployee);
    assert_eq!(decide(&policy, Some(MaskingType::Name), &ctx), FieldDecision::Omit);
}

#[test]
fn masking_can_be_disabled_per_request() {
    let ctx = CallerContext::new(Some(Channel::Web), RoleTier::CustomerAdmin).without_masking();
    assert_eq!(
        decide(&FieldPolicy::OPEN, Some(MaskingType::Name), &ctx),
        FieldDecision::Emit
    );
}

// --- apply ---

#[test]
fn internal_staff_on_web_sees_raw_values_minus_mobile_fields() {
    let filter = ResponseFilter::new();
    let mut record = card();
    filter.apply(&mut record, &CallerContext::new(Some(Channel::Web), RoleTier::InternalStaff));

    assert_eq!(record.name.as_deref(), Some("홍길동"));
    assert_eq!(record.phone.as_deref(), Some("010-1234-5678"));
    assert_eq!(record.salary_grade.as_deref(), Some("G4"));
    assert_eq!(record.badge_qr, None, "mobile-only field omitted on web");
    assert_eq!(record.dept_cd.as_deref(), Some("D100"));
}

#[test]
fn customer_employee_on_mobile_gets_masked_pii() {
    let filter = ResponseFilter::new();
    let mut record = card();
    filter.apply(
        &mut record,
        &CallerContext::new(Some(Channel::Mobile), RoleTier::CustomerEmployee),
    );

    assert_eq!(record.name.as_deref(), Some("홍*동"));
    assert_eq!(record.phone.as_deref(), Some("010-****-5678"));
    assert_eq!(record.salary_grade, None, "internal-only field omitted");
    assert_eq!(record.badge_qr.as_deref(), Some("qr-payload"));
    assert_eq!(record.dept_cd.as_deref(), Some("D100"));
}

#[test]
fn absent_fields_stay_absent() {
    let filter = ResponseFilter::new();
    let mut record = EmployeeCard::default();
    filter.apply(
        &mut record,
        &CallerContext::new(Some(Channel::Web), RoleTier::CustomerAdmin),
    );

    assert_eq!(record.name, None);
    assert_eq!(record.phone, None);
}

#[test]
fn apply_all_rewrites_a_whole_page() {
    let filter = ResponseFilter::new();
    let mut page = vec![card(), card(), card()];
    filter.apply_all(
        &mut page,
        &CallerContext::new(Some(Channel::Web), RoleTier::CustomerEmployee),
    );

    for record in &page {
        assert_eq!(record.name.as_deref(), Some("홍*동"));
        assert_eq!(record.salary_grade, None);
    }
}
