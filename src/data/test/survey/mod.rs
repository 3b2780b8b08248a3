use crate::{
    data::survey::SurveyRepository,
    model::survey::{CreateSurveyQuestionDto, SurveyAnswerDto, SurveyQuestionKind},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod responses;
